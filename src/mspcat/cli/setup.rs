use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use mspcat::api::ExportFormat;
use mspcat::form::ServiceForm;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mspcat",
    bin_name = "mspcat",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Manage, search and export an MSP service catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the catalog snapshot and config
    #[arg(long, global = true, env = "MSPCAT_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Catalog,
    Service,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Catalog => "Catalog Commands:",
            CommandGroup::Service => "Per-Service Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "add" | "stats" | "categories" => Some(CommandGroup::Catalog),
            "show" | "edit" | "delete" | "duplicate" | "feature" | "unfeature" | "activate"
            | "deactivate" => Some(CommandGroup::Service),
            "export" => Some(CommandGroup::Data),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Catalog,
            CommandGroup::Service,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("mspcat {version}\n"));
    output.push_str("Manage, search and export an MSP service catalog\n");
    output.push('\n');
    output.push_str("Usage: mspcat [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --home <DIR>  Directory holding the catalog [env: MSPCAT_HOME]\n");
    output.push_str("  -v, --verbose     Verbose output\n");
    output.push_str("  -h, --help        Print help\n");
    output.push_str("  -V, --version     Print version\n");

    output
}

/// Help for a command by name, falling back to the grouped help
pub fn help_for_command(name: &str) -> String {
    let mut cmd = Cli::command();
    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            return subcmd.render_help().to_string();
        }
    }
    format!("Unknown command: {}\n\n{}", name, get_grouped_help())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommands),

    #[command(flatten)]
    Service(ServiceCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List services, optionally filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Case-insensitive text matched against name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Category label, or "all" (defaults to the configured default-category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a new service
    #[command(alias = "n", display_order = 2)]
    Add {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Show catalog statistics
    #[command(display_order = 3)]
    Stats,

    /// List the service categories
    #[command(display_order = 4)]
    Categories,
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// Show one service in full
    #[command(alias = "v", display_order = 10)]
    Show { id: String },

    /// Edit a service; only the given fields change
    #[command(alias = "e", display_order = 11)]
    Edit {
        id: String,

        #[command(flatten)]
        form: FormArgs,
    },

    /// Delete a service
    #[command(alias = "rm", display_order = 12)]
    Delete { id: String },

    /// Copy a service under a new id
    #[command(alias = "cp", display_order = 13)]
    Duplicate { id: String },

    /// Mark services as featured
    #[command(display_order = 14)]
    Feature {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Clear the featured mark
    #[command(display_order = 15)]
    Unfeature {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Mark services as active
    #[command(display_order = 16)]
    Activate {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Mark services as inactive
    #[command(display_order = 17)]
    Deactivate {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Docx,
    All,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Docx => ExportFormat::Docx,
            ExportFormatArg::All => ExportFormat::All,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export the full catalog to CSV and/or Word
    #[command(display_order = 20)]
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormatArg::All)]
        format: ExportFormatArg,

        /// Output directory (defaults to the configured export-dir)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (export-dir, default-category)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for mspcat or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

/// Service fields as flags. Absent flags leave the form value alone.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Service name
    #[arg(long)]
    pub name: Option<String>,

    /// Category label (see `mspcat categories`)
    #[arg(long)]
    pub category: Option<String>,

    /// One-line summary
    #[arg(long = "short")]
    pub short_description: Option<String>,

    /// Detailed description
    #[arg(long)]
    pub description: Option<String>,

    /// fixed, range or consultation
    #[arg(long)]
    pub pricing_type: Option<String>,

    /// Price in USD
    #[arg(long)]
    pub amount: Option<String>,

    /// one-time, monthly or yearly
    #[arg(long)]
    pub period: Option<String>,

    /// e.g. "4 hours"
    #[arg(long = "response")]
    pub response_time: Option<String>,

    /// e.g. "24 hours"
    #[arg(long = "resolution")]
    pub resolution_time: Option<String>,

    /// e.g. "9 AM - 5 PM"
    #[arg(long)]
    pub availability: Option<String>,

    /// Emergency support available (true/false)
    #[arg(long = "emergency", value_name = "BOOL")]
    pub emergency_support: Option<bool>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

impl FormArgs {
    pub fn apply(self, form: &mut ServiceForm) {
        fn set(target: &mut String, value: Option<String>) {
            if let Some(v) = value {
                *target = v;
            }
        }

        set(&mut form.service_name, self.name);
        set(&mut form.category, self.category);
        set(&mut form.short_description, self.short_description);
        set(&mut form.description, self.description);
        set(&mut form.pricing_type, self.pricing_type);
        set(&mut form.amount, self.amount);
        set(&mut form.period, self.period);
        set(&mut form.response_time, self.response_time);
        set(&mut form.resolution_time, self.resolution_time);
        set(&mut form.availability, self.availability);
        set(&mut form.tags, self.tags);
        if let Some(emergency) = self.emergency_support {
            form.emergency_support = emergency;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn every_visible_command_has_a_group() {
        for sc in Cli::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn parses_add_flags_into_form() {
        let cli = Cli::try_parse_from([
            "mspcat",
            "add",
            "--name",
            "Help Desk",
            "--category",
            "Business Operations",
            "--short",
            "Tier 1 support",
            "--amount",
            "45",
            "--emergency",
            "true",
        ])
        .unwrap();

        let Some(Commands::Catalog(CatalogCommands::Add { form: args })) = cli.command else {
            panic!("expected add");
        };
        let mut form = ServiceForm::default();
        args.apply(&mut form);
        assert_eq!(form.service_name, "Help Desk");
        assert_eq!(form.short_description, "Tier 1 support");
        assert_eq!(form.amount, "45");
        assert_eq!(form.period, "monthly");
        assert!(form.emergency_support);
    }

    #[test]
    fn edit_leaves_unset_fields_alone() {
        let mut form = ServiceForm {
            service_name: "Old".into(),
            tags: "a, b".into(),
            ..ServiceForm::default()
        };
        FormArgs {
            name: Some("New".into()),
            ..FormArgs::default()
        }
        .apply(&mut form);
        assert_eq!(form.service_name, "New");
        assert_eq!(form.tags, "a, b");
    }

    #[test]
    fn grouped_help_lists_commands() {
        let help = get_grouped_help();
        assert!(help.contains("Catalog Commands:"));
        assert!(help.contains("duplicate"));
        assert!(help.contains("export"));
    }
}
