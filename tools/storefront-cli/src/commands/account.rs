//! Account settings: profile and password changes against the simulated
//! account service.

use anyhow::{bail, Result};
use storefront_widgets::forms::Gender;
use storefront_widgets::submit::{AccountSettings, Notice, SimulatedAccountService};

use super::{AccountArgs, AccountCommand, PasswordChangeArgs, ProfileArgs};
use crate::context::Context;
use crate::output::strength_meter;

/// Run the account command.
pub async fn run(args: AccountArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AccountCommand::Profile(args) => update_profile(args, ctx).await,
        AccountCommand::Password(args) => change_password(args, ctx).await,
    }
}

fn settings(ctx: &Context, fail: bool) -> AccountSettings<SimulatedAccountService> {
    let service = SimulatedAccountService::new(&ctx.config.submit);
    AccountSettings::new(if fail { service.failing() } else { service })
}

async fn update_profile(args: ProfileArgs, ctx: &Context) -> Result<()> {
    let mut settings = settings(ctx, args.fail);
    let profile = &mut settings.profile;
    if let Some(first_name) = args.first_name {
        profile.first_name = first_name;
    }
    if let Some(last_name) = args.last_name {
        profile.last_name = last_name;
    }
    if let Some(email) = args.email {
        profile.email = email;
    }
    if let Some(phone) = args.phone {
        profile.phone_number = Some(phone);
    }
    if let Some(gender) = args.gender {
        profile.gender = Some(gender);
    }
    if let Some(marketing) = args.marketing_emails {
        profile.marketing_emails = marketing;
    }

    let spinner = ctx.output.spinner("Saving profile...");
    let notice = settings.submit_profile().await;
    spinner.finish_and_clear();
    let notice = notice?;

    if !ctx.output.is_json() && notice.is_success() {
        let profile = &settings.profile;
        ctx.output.header("Profile");
        ctx.output.kv("name", &profile.full_name());
        ctx.output.kv("email", &profile.email);
        if let Some(gender) = profile.gender {
            ctx.output.kv("gender", gender.display_name());
        }
        ctx.output.kv("marketing emails", &profile.marketing_emails.to_string());
    }
    report(notice, ctx)
}

async fn change_password(args: PasswordChangeArgs, ctx: &Context) -> Result<()> {
    let mut settings = settings(ctx, args.fail);
    settings.password.current_password = args.current;
    settings.password.new_password = args.new;
    settings.password.confirm_password = args.confirm;
    settings.password.two_factor_enabled = args.two_factor;

    let strength = settings.password.strength();
    ctx.output.kv(
        "strength",
        &format!(
            "{} {}",
            strength_meter(strength.label(), strength.fill_ratio(), 20),
            strength.label().display_name()
        ),
    );

    let spinner = ctx.output.spinner("Updating password...");
    let notice = settings.submit_password().await;
    spinner.finish_and_clear();
    report(notice?, ctx)
}

/// A failure notice becomes the command's error.
fn report(notice: Notice, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&notice);
    }
    match notice {
        Notice::Success(message) => {
            ctx.output.success(&message);
            Ok(())
        }
        Notice::Error(message) => bail!(message),
    }
}

/// Parse a `--gender` value.
pub fn parse_gender(value: &str) -> Result<Gender, String> {
    match value.to_ascii_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        "other" => Ok(Gender::Other),
        "prefer-not-to-say" => Ok(Gender::PreferNotToSay),
        _ => Err(format!(
            "unknown gender '{}' (male, female, other, prefer-not-to-say)",
            value
        )),
    }
}
