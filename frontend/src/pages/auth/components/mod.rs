pub mod login_form;
pub mod register_form;
