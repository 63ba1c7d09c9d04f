use clap::{Parser, Subcommand};

/// Command-line interface definition for gracedesk
/// CLI directory and booking tool for counseling clients and counselors
#[derive(Parser)]
#[command(
    name = "gracedesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local-first counseling directory and booking CLI backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Check the configuration file for missing fields
        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a client account and log in
    Register {
        /// Display name
        name: String,

        /// Account email (must not already be registered)
        email: String,

        /// Account password
        #[arg(long = "password")]
        password: String,

        /// Repeat the password; must match
        #[arg(long = "confirm")]
        confirm: String,

        /// Acknowledge the platform terms and disclaimer
        #[arg(long = "accept-terms")]
        accept_terms: bool,
    },

    /// Log in with an email and password
    Login {
        email: String,

        #[arg(long = "password")]
        password: String,
    },

    /// Clear the current session
    Logout,

    /// Show the current session user
    Whoami,

    /// Browse and filter the counselor directory
    Browse {
        /// Free-text search across name, specialties, bio, credentials and denomination
        #[arg(long, short)]
        search: Option<String>,

        /// Required specialty; repeat to match any of several
        #[arg(long = "specialty")]
        specialties: Vec<String>,

        /// Exact location, e.g. "Nashville, TN"
        #[arg(long)]
        location: Option<String>,

        /// Exact education institution
        #[arg(long)]
        education: Option<String>,

        /// Accreditation membership, e.g. "ACBC"
        #[arg(long)]
        accreditation: Option<String>,

        /// Denomination (substring match)
        #[arg(long)]
        denomination: Option<String>,

        /// Exact gender
        #[arg(long)]
        gender: Option<String>,

        /// Years of experience bucket: 0-5, 5-10, 10-15 or 15+
        #[arg(long, help = "Experience bucket: 0-5, 5-10, 10-15 or 15+")]
        experience: Option<String>,
    },

    /// Show one counselor profile in full
    Show {
        /// Counselor id
        id: String,
    },

    /// Join the directory as a counselor (creates a profile)
    Join {
        /// Display name
        name: String,

        /// Contact email
        email: String,

        #[arg(long, default_value = "Biblical Counselor")]
        title: String,

        /// Credentials line, e.g. "M.A., CCEF"
        #[arg(long, default_value = "")]
        credentials: String,

        #[arg(long, default_value = "Non-denominational")]
        denomination: String,

        /// Profile image URL
        #[arg(long = "image", default_value = "")]
        image_url: String,

        /// Specialty tag; repeat for several
        #[arg(long = "specialty")]
        specialties: Vec<String>,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        bio: String,

        /// PayPal payment link
        #[arg(long = "paypal", default_value = "")]
        paypal_link: String,

        /// Available weekday; repeat for several
        #[arg(long = "available")]
        availability: Vec<String>,

        /// Hourly rate
        #[arg(long, default_value_t = 75.0)]
        rate: f64,

        #[arg(long, default_value = "")]
        education: String,

        /// Accreditation body; repeat for several
        #[arg(long = "accreditation")]
        accreditation: Vec<String>,

        #[arg(long, default_value = "")]
        gender: String,

        /// Years of counseling experience
        #[arg(long = "years", default_value_t = 0)]
        years_experience: u32,

        /// Create the profile closed to new clients
        #[arg(long = "not-accepting")]
        not_accepting: bool,
    },

    /// Book a session with a counselor
    Book {
        /// Counselor id
        counselor_id: String,

        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Session time (HH:MM, local)
        #[arg(long)]
        time: String,

        /// Optional note for the counselor
        #[arg(long)]
        notes: Option<String>,
    },

    /// List appointments for the current user
    Appointments {
        /// Include completed and cancelled appointments
        #[arg(long)]
        all: bool,
    },

    /// Mark an appointment completed (owning counselor or admin)
    Complete {
        /// Appointment id
        id: String,
    },

    /// Cancel a scheduled appointment (owning counselor or admin)
    Cancel {
        /// Appointment id
        id: String,
    },

    /// Send a message to a counselor or client
    Send {
        /// Receiver id
        to: String,

        /// Message text
        content: String,
    },

    /// List messages for the current user
    Inbox {
        /// Only unread received messages
        #[arg(long)]
        unread: bool,
    },

    /// Mark a received message as read
    Read {
        /// Message id
        id: String,
    },

    /// Issue a platform invoice to a counselor (admin)
    Bill {
        /// Counselor id
        counselor_id: String,

        /// Invoice amount
        #[arg(long, default_value_t = 90.0)]
        amount: f64,

        #[arg(long, default_value = "Monthly platform subscription")]
        description: String,

        /// Days until the invoice is due
        #[arg(long = "due-days", default_value_t = 15)]
        due_days: i64,
    },

    /// List invoices (admin sees all, counselors their own)
    Invoices {
        /// Only pending invoices
        #[arg(long)]
        pending: bool,
    },

    /// Mark a pending invoice as paid (admin)
    Pay {
        /// Invoice id
        id: String,
    },

    /// Role-based overview of the platform
    Dashboard,
}
