pub mod review;
pub mod session;
