use anyhow::{Context, Result};
use bearer_guard::services::auth::{TokenCodec, TokenStatus};
use clap::{Parser, Subcommand};

/// Issue or inspect HS512 access tokens with a shared secret.
///
/// Intended for local testing against the API:
/// - `issue` prints a token for (user_id, role), valid for 10 minutes
/// - `inspect` verifies a token and prints the identity it carries
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Signing secret. Must match the server's JWT_SECRET.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    secret: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a new token
    Issue {
        /// Subject id (user_id claim)
        #[arg(long)]
        user_id: u32,

        /// Role label (role claim)
        #[arg(long)]
        role: String,

        /// Print only the token (no extra lines)
        #[arg(long, default_value_t = false)]
        quiet: bool,
    },
    /// Verify a token and print its identity
    Inspect {
        token: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let codec = TokenCodec::new(&args.secret).context("invalid --secret")?;

    match args.command {
        Command::Issue {
            user_id,
            role,
            quiet,
        } => {
            let token = codec.encode(user_id, &role).context("failed to sign token")?;

            if quiet {
                println!("{token}");
            } else {
                println!("token: {token}");
                println!("curl -H 'Authorization: Bearer {token}' http://localhost:3000/api/v1/me");
            }
        }
        Command::Inspect { token } => {
            match codec.decode(&token).context("failed to parse token")? {
                TokenStatus::Valid(identity) => {
                    println!("valid user_id={} role={}", identity.subject_id, identity.role);
                }
                TokenStatus::Invalid(reason) => {
                    println!("invalid: {reason}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
