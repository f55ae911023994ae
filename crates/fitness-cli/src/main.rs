use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use fitness_cli::admins::{NewAdmin, create_admin};
use fitness_cli::seeder::{self, SeedConfig};
use fitness_config::DatabaseConfig;
use fitness_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "fitness-cli")]
#[command(
    about = "Fitness CLI - Administrative tools for the fitness studio API",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an admin account
    CreateAdmin {
        /// Login used to sign in
        #[arg(short = 'u', long)]
        login: Option<String>,

        /// First name of the admin
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the admin
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Mark the admin as a super admin
        #[arg(long = "super")]
        super_admin: bool,
    },
    /// Seed the database with fake workout types, clients, trainers and workouts
    Seed {
        /// Number of workout types to create
        #[arg(long, default_value = "8")]
        workout_types: usize,

        /// Number of clients to create
        #[arg(long, default_value = "50")]
        clients: usize,

        /// Number of trainers to create
        #[arg(long, default_value = "6")]
        trainers: usize,

        /// Number of workouts to create
        #[arg(long, default_value = "200")]
        workouts: usize,

        /// Workouts are dated within this many days of today
        #[arg(long, default_value = "30")]
        spread_days: i64,
    },
    /// Clear all seeded data (keeps admins)
    ClearSeed,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
    run_migrations(&pool).await?;

    let outcome = match cli.command {
        Commands::CreateAdmin {
            login,
            first_name,
            last_name,
            password,
            super_admin,
        } => handle_create_admin(&pool, login, first_name, last_name, password, super_admin).await,
        Commands::Seed {
            workout_types,
            clients,
            trainers,
            workouts,
            spread_days,
        } => {
            let config = SeedConfig {
                workout_types,
                clients,
                trainers,
                workouts,
                spread_days,
            };
            seeder::seed_all(&pool, config).await
        }
        Commands::ClearSeed => seeder::clear_all(&pool).await,
    };

    if let Err(e) = outcome {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn prompt(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::new().with_prompt(label).interact_text()?),
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    login: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    password: Option<String>,
    is_super: bool,
) -> Result<()> {
    let login = prompt(login, "Login")?;
    let first_name = prompt(first_name, "First name")?;
    let last_name = prompt(last_name, "Last name")?;

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let admin = NewAdmin {
        login,
        password,
        first_name,
        last_name,
        is_super,
    };
    let id = create_admin(pool, &admin).await?;

    println!("\n✅ Admin created successfully!");
    println!("   Id: {}", id);
    println!("   Login: {}", admin.login.trim());
    println!("   Name: {} {}", admin.first_name, admin.last_name);
    if admin.is_super {
        println!("   Super admin: yes");
    }

    Ok(())
}
