pub mod otp;

pub use otp::{ApiFailure, SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse};
