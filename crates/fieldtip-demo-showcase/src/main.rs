#![forbid(unsafe_code)]

//! Scripted fieldtip showcase: a login form in a simulated document,
//! driven through submit, reposition, obstruction, language switch, and
//! dismissal. Run with `RUST_LOG=debug` to see the controller's tracing.

mod sim;

use fieldtip::{
    Email, Field, FieldValue, Form, HostEvent, Lang, PasswordRules, POLL_INTERVAL_MS, Rect,
    Required, TooltipController, TooltipOverrides,
};
use tracing_subscriber::EnvFilter;

use sim::{ConsoleSurface, SimAnchor, SimDocument};

const EMAIL_CONTROL: u64 = 10;
const PASSWORD_CONTROL: u64 = 11;
const MODAL: u64 = 90;

type Controller = TooltipController<SimAnchor, SimDocument, ConsoleSurface>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let doc = SimDocument::new();
    doc.add_control(EMAIL_CONTROL, Rect::new(100.0, 40.0, 260.0, 32.0));
    doc.add_control(PASSWORD_CONTROL, Rect::new(160.0, 40.0, 260.0, 32.0));

    let mut form = Form::new()
        .field(
            Field::new("email")
                .validator(Required::i18n())
                .validator(Email::i18n())
                .value(FieldValue::text("jean.at.example.ch")),
        )
        .field(
            Field::new("password")
                .validator(PasswordRules::i18n(8, 2, 1))
                .value(FieldValue::text("abc")),
        );

    let mut email_tip: Controller = TooltipController::attach(
        doc.anchor(EMAIL_CONTROL),
        doc.clone(),
        ConsoleSurface::new("email"),
        TooltipOverrides::new(),
        TooltipOverrides::new().id("email"),
    )
    .expect("valid email tooltip options");

    let mut password_tip: Controller = TooltipController::attach(
        doc.anchor(PASSWORD_CONTROL),
        doc.clone(),
        ConsoleSurface::new("password"),
        TooltipOverrides::new(),
        TooltipOverrides::new().id("password"),
    )
    .expect("valid password tooltip options");

    let mut now: u64 = 0;
    let frame = |email_tip: &mut Controller, password_tip: &mut Controller| {
        email_tip.on_frame();
        password_tip.on_frame();
    };
    let poll = |now: &mut u64, email_tip: &mut Controller, password_tip: &mut Controller| {
        *now += POLL_INTERVAL_MS;
        email_tip.tick(*now);
        password_tip.tick(*now);
    };

    println!("== submit with invalid values ==");
    email_tip.set_errors(form.get("email").map(Field::errors).unwrap_or_default());
    password_tip.set_errors(form.get("password").map(Field::errors).unwrap_or_default());
    email_tip.handle_event(HostEvent::FormSubmitted);
    password_tip.handle_event(HostEvent::FormSubmitted);
    frame(&mut email_tip, &mut password_tip);
    email_tip.tick(now);
    password_tip.tick(now);

    println!("== page scrolls; the poll repositions ==");
    doc.scroll_to(120.0);
    poll(&mut now, &mut email_tip, &mut password_tip);

    println!("== a modal covers the email field ==");
    doc.cover(MODAL, Rect::new(80.0, 0.0, 400.0, 80.0));
    poll(&mut now, &mut email_tip, &mut password_tip);

    println!("== the modal closes ==");
    doc.uncover();
    poll(&mut now, &mut email_tip, &mut password_tip);

    println!("== switch the UI to French ==");
    email_tip.set_language(Lang::Fr);
    password_tip.set_language(Lang::Fr);
    frame(&mut email_tip, &mut password_tip);

    println!("== the user fixes the email address ==");
    if let Some(field) = form.get_mut("email") {
        field.set_value(FieldValue::text("jean@example.ch"));
    }
    email_tip.set_errors(form.get("email").map(Field::errors).unwrap_or_default());

    println!("== focusing the password field dismisses its tooltip ==");
    password_tip.handle_event(HostEvent::FocusInOnAnchor);

    email_tip.dispose();
    password_tip.dispose();
    println!("== done ==");
}
