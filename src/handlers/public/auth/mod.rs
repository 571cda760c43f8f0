// handlers/public/auth/mod.rs - Public authentication handlers
//
// Account creation and token acquisition. These are the only endpoints that
// ever see a plaintext password.

pub mod login;
pub mod register;
