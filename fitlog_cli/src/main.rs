use clap::{Parser, Subcommand};
use fitlog_core::*;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Exercise tracker and calorie calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Register {
        username: String,

        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,

        /// Password confirmation (prompted if omitted)
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Verify credentials and show an account summary
    Login {
        username: String,

        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log an exercise with an optional machine image reference
    Log {
        username: String,

        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,

        /// Exercise name
        #[arg(long)]
        name: String,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Path to a machine image (stored by reference, never copied)
        #[arg(long)]
        image: Option<String>,
    },

    /// List logged exercises, oldest first
    List {
        username: String,

        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Calculate daily calorie needs and macro breakdown
    Calc {
        #[arg(long)]
        age: u32,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: u32,

        /// male or female
        #[arg(long)]
        gender: String,

        /// sedentary, active, or very-active
        #[arg(long)]
        activity: String,

        /// weight-loss, muscle-gain, or maintain
        #[arg(long)]
        goal: String,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    fitlog_core::logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine data directory and store path
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let store_path = data_dir.join("user_data.json");
    let auth = AuthService::new(&store_path, config.security.bcrypt_cost);

    match cli.command {
        Commands::Register {
            username,
            password,
            confirm_password,
        } => cmd_register(&auth, &username, password, confirm_password),
        Commands::Login { username, password } => cmd_login(&auth, &username, password),
        Commands::Log {
            username,
            password,
            name,
            weight,
            image,
        } => cmd_log(&auth, &store_path, &username, password, name, weight, image),
        Commands::List { username, password } => cmd_list(&auth, &store_path, &username, password),
        Commands::Calc {
            age,
            weight,
            height,
            gender,
            activity,
            goal,
        } => cmd_calc(age, weight, height, &gender, &activity, &goal),
    }
}

fn cmd_register(
    auth: &AuthService,
    username: &str,
    password: Option<String>,
    confirm_password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt("Password: ")?,
    };
    let confirm = match confirm_password {
        Some(p) => p,
        None => prompt("Confirm password: ")?,
    };

    auth.register(username, &password, &confirm)?;
    println!("✓ Account created for '{username}'");
    Ok(())
}

fn cmd_login(auth: &AuthService, username: &str, password: Option<String>) -> Result<()> {
    let session = authenticate(auth, username, password)?;
    println!(
        "✓ Logged in as '{}' ({} exercise(s) logged)",
        session.username,
        session.record.entries().len()
    );
    Ok(())
}

fn cmd_log(
    auth: &AuthService,
    store_path: &std::path::Path,
    username: &str,
    password: Option<String>,
    name: String,
    weight: f64,
    image: Option<String>,
) -> Result<()> {
    let mut session = authenticate(auth, username, password)?;

    let log = ExerciseLog::new(store_path);
    log.append(&mut session, ExerciseEntry::new(name, weight, image))?;

    println!("✓ Exercise saved");
    print_entries(log.list(&session));
    Ok(())
}

fn cmd_list(
    auth: &AuthService,
    store_path: &std::path::Path,
    username: &str,
    password: Option<String>,
) -> Result<()> {
    let session = authenticate(auth, username, password)?;
    let log = ExerciseLog::new(store_path);
    print_entries(log.list(&session));
    Ok(())
}

fn cmd_calc(
    age: u32,
    weight: f64,
    height: u32,
    gender: &str,
    activity: &str,
    goal: &str,
) -> Result<()> {
    let inputs = CalculationInputs {
        age,
        weight_kg: weight,
        height_cm: height,
        gender: gender.parse()?,
        activity_level: activity.parse()?,
        goal: goal.parse()?,
    };

    let result = calculate(&inputs)?;

    println!(
        "Your Total Daily Energy Expenditure (TDEE) is: {:.2} calories/day",
        result.tdee
    );
    println!(
        "Calories you should eat for {}: {:.2} calories/day",
        inputs.goal, result.caloric_intake
    );
    println!("Macronutrient Breakdown:");
    println!("Protein: {:.2} grams", result.protein_g);
    println!("Carbohydrates: {:.2} grams", result.carbs_g);
    println!("Fat: {:.2} grams", result.fat_g);
    println!(
        "Total Calories from Macros: {:.2} calories",
        result.total_macro_calories
    );
    Ok(())
}

fn authenticate(auth: &AuthService, username: &str, password: Option<String>) -> Result<Session> {
    let password = match password {
        Some(p) => p,
        None => prompt("Password: ")?,
    };
    auth.login(username, &password)
}

fn print_entries(entries: &[ExerciseEntry]) {
    if entries.is_empty() {
        println!("No exercises logged yet.");
        return;
    }

    println!("Previous exercises:");
    for (i, entry) in entries.iter().enumerate() {
        println!("  {}. {} ({} kg)", i + 1, entry.name, entry.weight);
        if let Some(ref image) = entry.image {
            println!("     image: {image}");
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
