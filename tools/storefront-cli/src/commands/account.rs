//! Login and registration form checks.

use anyhow::{bail, Result};
use serde_json::json;
use storefront_commerce::account::{FormErrors, LoginForm, RegisterForm};
use storefront_commerce::view::AuthMode;

use super::{LoginArgs, RegisterArgs};
use crate::context::Context;

/// Run the login command.
pub fn run_login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let form = LoginForm::new(args.email, args.password);
    report(AuthMode::Login, form.validate(), ctx)
}

/// Run the register command.
pub fn run_register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let mut mode = AuthMode::default();
    mode.show_register();

    let form = RegisterForm {
        name: args.name,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
    };
    report(mode, form.validate(), ctx)
}

fn report(mode: AuthMode, result: Result<(), FormErrors>, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let errors = result.as_ref().err().cloned().unwrap_or_default();
        ctx.output.json(&json!({
            "mode": mode,
            "valid": result.is_ok(),
            "errors": errors,
        }));
    } else {
        ctx.output.header(mode.heading());
    }

    match result {
        Ok(()) => {
            tracing::info!(mode = ?mode, "form is valid");
            ctx.output.success("Form is valid");
            Ok(())
        }
        Err(errors) => {
            for (field, message) in errors.iter() {
                ctx.output.kv(field.as_str(), message);
            }
            bail!("{} field(s) need attention", errors.len())
        }
    }
}
