pub mod discover;
pub mod generate_panel;
pub mod home;
pub mod login_form;
pub mod modal;
pub mod nav;
pub mod recipe_list;
pub mod settings;
pub mod statistics;
pub mod toast;
