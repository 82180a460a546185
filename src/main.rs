//! Dishdesk CLI - local CRM for cable/DTH subscription operators
//!
//! Usage: dishdesk <COMMAND>
//!
//! Operator commands (list, show, add, edit, pay, delete, search, stats)
//! require `dishdesk login` first; `lookup` is the public self-service
//! search and never does.

use anyhow::Result;
use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Utc};
use clap::Parser;
use dialoguer::{Confirm, Input, Password};
use is_terminal::IsTerminal;

use dishdesk::application::{
    AuthUseCase, CustomerUseCase, Intent, NoticeKind, PaymentInput, Screen, SessionController,
};
use dishdesk::domain::ports::{CustomerStore, SessionStore};
use dishdesk::presentation::cli::{AddArgs, Cli, Commands, EditArgs};
use dishdesk::presentation::{
    create_auth_use_case, create_customer_use_case, DashboardView, DetailView, ListView,
    LookupView,
};
use dishdesk::{CustomerDraft, CustomerUpdate, DishdeskError, StatusFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = std::io::stdout().is_terminal() && !cli.no_color;

    let customers = create_customer_use_case();
    let auth = create_auth_use_case();

    match cli.command {
        Commands::Lookup { query } => cmd_lookup(&customers, &query, color),
        Commands::Login { username, password } => cmd_login(&auth, username, password, color),
        Commands::Logout => cmd_logout(&auth),
        admin => {
            if !auth.is_authenticated() {
                anyhow::bail!(
                    "not logged in - run 'dishdesk login' (the public lookup needs no login)"
                );
            }
            // Seed the demo roster on first run, before any operation.
            customers.bootstrap()?;

            match admin {
                Commands::Stats => cmd_stats(&customers, color),
                Commands::List { status } => cmd_list(&customers, status, color),
                Commands::Show { id } => cmd_show(&customers, &id, color),
                Commands::Add(args) => cmd_add(&customers, args, color),
                Commands::Edit(args) => cmd_edit(&customers, args, color),
                Commands::Pay {
                    id,
                    amount,
                    description,
                    mode,
                } => cmd_pay(&customers, &id, amount, description, mode, color),
                Commands::Delete { id, yes } => cmd_delete(&customers, &id, yes, color),
                Commands::Search { query } => cmd_search(&customers, &query, color),
                Commands::Lookup { .. } | Commands::Login { .. } | Commands::Logout => {
                    unreachable!("handled above")
                }
            }
        }
    }
}

fn cmd_stats<CS: CustomerStore>(customers: &CustomerUseCase<CS>, color: bool) -> Result<()> {
    let stats = customers.stats()?;
    print!("{}", DashboardView::new(stats).render(color));
    Ok(())
}

fn cmd_list<CS: CustomerStore>(
    customers: &CustomerUseCase<CS>,
    status: StatusFilter,
    color: bool,
) -> Result<()> {
    let listed = customers.list(status)?;
    print!("{}", ListView::new(&listed, status).render(color));
    Ok(())
}

fn cmd_show<CS: CustomerStore>(
    customers: &CustomerUseCase<CS>,
    id: &str,
    color: bool,
) -> Result<()> {
    let mut session = SessionController::new(Screen::CustomerList);
    session.apply(Intent::ViewCustomer { id: id.to_string() });
    render_screen(customers, &session, color)
}

fn cmd_add<CS: CustomerStore>(
    customers: &CustomerUseCase<CS>,
    args: AddArgs,
    color: bool,
) -> Result<()> {
    let installation_date = match &args.installed {
        Some(raw) => parse_day(raw)?,
        None => today(),
    };
    let renewal_date = match &args.renewal {
        Some(raw) => parse_day(raw)?,
        None => one_year_after(installation_date),
    };

    let draft = CustomerDraft {
        name: args.name,
        contact_number: args.contact,
        account_id: args.account_id,
        city: args.city,
        email: args.email,
        connection_status: args.status,
        provider: args.provider,
        subscription_price: args.price,
        installation_date,
        renewal_date,
    };

    let mut session = SessionController::new(Screen::AddCustomer);
    match customers.add(draft) {
        Ok(_) => {
            session.notify_success("Customer added successfully!");
            session.apply(Intent::AddSucceeded);
        }
        Err(DishdeskError::DuplicateAccountId { .. }) => {
            session.notify_error("Error: Account ID already exists.");
            session.apply(Intent::AddFailed);
        }
        Err(other) => return Err(other.into()),
    }
    render_screen(customers, &session, color)
}

fn cmd_edit<CS: CustomerStore>(
    customers: &CustomerUseCase<CS>,
    args: EditArgs,
    color: bool,
) -> Result<()> {
    // Pre-fill from the current record, then overlay the supplied flags -
    // the CLI equivalent of the pre-populated edit form.
    let current = customers.get(&args.id)?;
    let mut update = CustomerUpdate::from_customer(&current);

    if let Some(name) = args.name {
        update.name = name;
    }
    if let Some(contact) = args.contact {
        update.contact_number = contact;
    }
    if let Some(city) = args.city {
        update.city = city;
    }
    if let Some(email) = args.email {
        update.email = Some(email);
    }
    if let Some(status) = args.status {
        update.connection_status = status;
    }
    if let Some(provider) = args.provider {
        update.provider = provider;
    }
    if let Some(price) = args.price {
        update.subscription_price = Some(price);
    }
    if args.clear_price {
        update.subscription_price = None;
    }
    if let Some(raw) = args.installed {
        update.installation_date = parse_day(&raw)?;
    }
    if let Some(raw) = args.renewal {
        update.renewal_date = parse_day(&raw)?;
    }

    let mut session = SessionController::new(Screen::EditCustomer {
        id: args.id.clone(),
    });
    match customers.update(&args.id, update, None) {
        Ok(_) => {
            session.notify_success("Customer updated successfully!");
            session.apply(Intent::UpdateSucceeded { id: args.id });
        }
        Err(err) => {
            session.notify_error(err.to_string());
            session.apply(Intent::UpdateFailed);
            render_notice(&session, color);
            std::process::exit(1);
        }
    }
    render_screen(customers, &session, color)
}

fn cmd_pay<CS: CustomerStore>(
    customers: &CustomerUseCase<CS>,
    id: &str,
    amount: String,
    description: String,
    mode: dishdesk::PaymentMode,
    color: bool,
) -> Result<()> {
    let current = customers.get(id)?;
    let update = CustomerUpdate::from_customer(&current);
    let payment = PaymentInput::new(description, amount).with_mode(mode);

    let mut session = SessionController::new(Screen::CustomerDetail { id: id.to_string() });
    match customers.update(id, update, Some(payment)) {
        Ok(_) => {
            session.notify_success("Customer updated successfully!");
            session.apply(Intent::UpdateSucceeded { id: id.to_string() });
        }
        Err(err) => {
            session.notify_error(err.to_string());
            session.apply(Intent::UpdateFailed);
            render_notice(&session, color);
            std::process::exit(1);
        }
    }
    render_screen(customers, &session, color)
}

fn cmd_delete<CS: CustomerStore>(
    customers: &CustomerUseCase<CS>,
    id: &str,
    yes: bool,
    color: bool,
) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this customer?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let mut session = SessionController::new(Screen::CustomerDetail { id: id.to_string() });
    // Idempotent: a missing id deletes nothing and reports no error.
    customers.delete(id)?;
    session.notify_success("Customer deleted successfully!");
    session.apply(Intent::DeleteConfirmed);
    render_screen(customers, &session, color)
}

fn cmd_search<CS: CustomerStore>(
    customers: &CustomerUseCase<CS>,
    query: &str,
    color: bool,
) -> Result<()> {
    let matches = customers.search(query)?;
    print!("{}", ListView::new(&matches, StatusFilter::All).render(color));
    Ok(())
}

fn cmd_lookup<CS: CustomerStore>(
    customers: &CustomerUseCase<CS>,
    query: &str,
    color: bool,
) -> Result<()> {
    customers.bootstrap()?;
    let matches = customers.search(query)?;
    print!("{}", LookupView::new(&matches, query).render(color));
    Ok(())
}

fn cmd_login<SS: SessionStore>(
    auth: &AuthUseCase<SS>,
    username: Option<String>,
    password: Option<String>,
    color: bool,
) -> Result<()> {
    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let mut session = SessionController::new(Screen::Login);
    match auth.login(&username, &password) {
        Ok(()) => {
            session.notify_success("Logged in.");
            session.apply(Intent::LoginSucceeded);
            render_notice(&session, color);
            Ok(())
        }
        Err(err) => {
            session.notify_error(err.to_string());
            session.apply(Intent::LoginFailed);
            render_notice(&session, color);
            std::process::exit(1);
        }
    }
}

fn cmd_logout<SS: SessionStore>(auth: &AuthUseCase<SS>) -> Result<()> {
    auth.logout()?;
    println!("Logged out.");
    Ok(())
}

/// Render the controller's current screen (and any pending notice)
fn render_screen<CS: CustomerStore>(
    customers: &CustomerUseCase<CS>,
    session: &SessionController,
    color: bool,
) -> Result<()> {
    render_notice(session, color);
    match session.screen() {
        Screen::Dashboard => cmd_stats(customers, color),
        Screen::CustomerList => cmd_list(customers, StatusFilter::All, color),
        Screen::CustomerDetail { id } => {
            let customer = customers.get(id)?;
            print!("{}", DetailView::new(&customer).render(color));
            Ok(())
        }
        // Form screens have no standalone rendering in the one-shot CLI;
        // reaching one here means the operation failed and the notice
        // already carried the error.
        Screen::AddCustomer | Screen::EditCustomer { .. } => std::process::exit(1),
        Screen::PublicHome | Screen::Login => Ok(()),
    }
}

fn render_notice(session: &SessionController, color: bool) {
    if let Some(notice) = session.notice_at(Utc::now()) {
        let painted = if !color {
            notice.message.clone()
        } else if notice.kind == NoticeKind::Error {
            format!("\x1b[31m{}\x1b[0m", notice.message)
        } else {
            format!("\x1b[32m{}\x1b[0m", notice.message)
        };
        match notice.kind {
            NoticeKind::Error => eprintln!("{painted}"),
            NoticeKind::Success => println!("{painted}"),
        }
    }
}

fn parse_day(raw: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{raw}' (expected YYYY-MM-DD): {e}"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("invalid date '{raw}'"))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

fn today() -> DateTime<Utc> {
    let now = Utc::now();
    Utc.with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
        .single()
        .unwrap_or(now)
}

fn one_year_after(date: DateTime<Utc>) -> DateTime<Utc> {
    date.checked_add_months(Months::new(12)).unwrap_or(date)
}
