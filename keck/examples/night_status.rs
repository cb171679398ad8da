use keck::{Credentials, KeckClient, KeckURL, LoginError};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let credentials = get_credentials().await?;
    let client = KeckClient::new(credentials);

    let today = chrono::Local::now().date_naive();

    let schedule = client.fetch_night_schedule(today).await?;
    println!("Schedule for {}:", today);
    for item in &schedule {
        println!(
            "  K{} {:8} {} - {} | {} ({})",
            item.tel_nr.as_deref().unwrap_or("?"),
            item.instrument,
            item.start_time,
            item.end_time,
            item.proj_code,
            item.institution,
        );
    }

    let status = client.fetch_instruments_too_status(today).await?;
    println!("\nToO readiness:");
    for (name, row) in &status {
        println!(
            "  {:8} {}",
            name,
            if row.is_too_ready() { "ready" } else { "not ready" }
        );
    }

    Ok(())
}

async fn get_credentials() -> Result<Credentials, Box<dyn Error>> {
    dotenvy::from_filename("./keck/.env.local").ok();
    let email = env::var("KECK_EMAIL").expect("KECK_EMAIL must be set");
    let password = env::var("KECK_PASSWORD").expect("KECK_PASSWORD must be set");

    let base = KeckURL::from_env();
    match Credentials::login(&base, &email, &password).await {
        Err(LoginError::VerificationRequired) => {
            println!("Verification token required; check your email and set KECK_TOKEN.");
            let token = env::var("KECK_TOKEN").expect("KECK_TOKEN must be set");
            Credentials::verify_token(&base, &email, &token).await?;
            Ok(Credentials::login(&base, &email, &password).await?)
        }
        other => Ok(other?),
    }
}
