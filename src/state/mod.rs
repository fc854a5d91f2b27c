/// State management module
///
/// This module handles all application state, including:
/// - Session preferences: language and theme (session.rs)
/// - The disease detection image intake pipeline (intake.rs)
/// - The yield prediction form pipeline (form.rs)

pub mod form;
pub mod intake;
pub mod session;
