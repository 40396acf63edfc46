//! Data models for roster
//!
//! Core types:
//! - Score: a GPA value that is guaranteed to lie in the accepted range
//! - Student: one validated record (name, address, score)

mod score;
mod student;

pub use score::Score;
pub use student::Student;
