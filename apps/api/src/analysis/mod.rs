//! Rule-based resume analysis: validation gate, skill extraction, role mapping.
//!
//! Everything in this module is a pure function of the resume text — no LLM
//! calls, no I/O. The pipeline is: gate → skills → roles.

pub mod handlers;
pub mod roles;
pub mod skills;
pub mod validator;
