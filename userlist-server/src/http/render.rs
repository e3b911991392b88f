//! HTML rendering for the home page
//!
//! Pure: takes users, returns markup. Template is compiled into the binary
//! and auto-escaped because its name ends in `.html`.

use minijinja::{context, Environment};
use once_cell::sync::Lazy;

use crate::models::User;

const HOME_TEMPLATE: &str = "home.html";

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template(HOME_TEMPLATE, include_str!("../../templates/home.html"))
        .expect("invalid home template");
    env
});

/// Render the home page listing `users` in the given order.
pub fn render_home(users: &[User]) -> Result<String, minijinja::Error> {
    TEMPLATES
        .get_template(HOME_TEMPLATE)?
        .render(context! { users => users })
}
