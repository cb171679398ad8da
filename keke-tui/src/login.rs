use anyhow::{bail, Context, Result};
use keck::{Credentials, KeckURL, LoginError};
use std::io::{self, Write};

/// Run the interactive login flow:
/// 1. Prompt for the observatory account email and password
/// 2. GET /login/script; a 401 means the server emailed a verification token
/// 3. If needed, prompt for the token, redeem it, and log in again
/// 4. Save the session uid and return it
pub async fn run_login(api_url: &str) -> Result<String> {
    let base = KeckURL::new(api_url);

    let email = prompt_line("Keck email: ")?;
    let password =
        rpassword::prompt_password("Keck password: ").context("Failed to read password")?;

    let credentials = match Credentials::login(&base, &email, &password).await {
        Ok(credentials) => credentials,
        Err(LoginError::VerificationRequired) => {
            println!("A verification token has been emailed to {}.", email);
            let token = prompt_line("Verification token: ")?;
            Credentials::verify_token(&base, &email, &token)
                .await
                .context("Token verification failed")?;
            Credentials::login(&base, &email, &password)
                .await
                .context("Login failed after token verification")?
        }
        Err(e) => bail!("Login failed: {}", e),
    };

    crate::config::KekeConfig::save_session(&credentials.uid)?;
    println!("Login successful. Session saved.");

    Ok(credentials.uid)
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}
