use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdgen_cli::ColumnAlign;
use mdgen_cli::Commands;
use mdgen_cli::MdgenCli;
use mdgen_core::CsvTable;
use mdgen_core::config::CONFIG_FILE_CANDIDATES;
use mdgen_core::config::MdgenConfig;
use mdgen_core::manifest::DocumentManifest;
use mdgen_core::output::write_document;
use tracing_subscriber::EnvFilter;

const SAMPLE_CONFIG: &str = "# mdgen configuration\n\n[output]\n# Directory documents are \
                             written to, relative to the project root.\ndirectory = \
                             \"docs\"\nextension = \"md\"\nencoding = \"utf-8\"\n\n[defaults]\n# \
                             Language tag for code blocks without one.\ncode_lang = \
                             \"generic\"\n# Heading levels listed by tables of \
                             contents.\ntoc_levels = [2, 3]\n";

const SAMPLE_MANIFEST: &str = "# mdgen document manifest\n# Build it with `mdgen build \
                               document.toml`.\n\n[[elements]]\ntype = \"heading\"\ntext = \"My \
                               Document\"\nlevel = 1\n\n[[elements]]\ntype = \
                               \"table_of_contents\"\n\n[[elements]]\ntype = \"heading\"\ntext \
                               = \"Getting Started\"\nlevel = 2\n\n[[elements]]\ntype = \
                               \"paragraph\"\ntext = \"Generated with mdgen.\"\n\n[[elements]]\n\
                               type = \"checklist\"\nitems = [\"Edit document.toml\", \"Run \
                               mdgen build\"]\n";

fn main() {
	let args = MdgenCli::parse();

	init_tracing(args.verbose);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(|_| {
		Box::new(miette::MietteHandlerOpts::new().build())
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Build {
			manifest,
			name,
			out_dir,
			ext,
			encoding,
			stdout,
		}) => {
			run_build(
				&args,
				manifest,
				&BuildOverrides {
					name: name.clone(),
					out_dir: out_dir.clone(),
					ext: ext.clone(),
					encoding: encoding.clone(),
				},
				*stdout,
			)
		}
		Some(Commands::Table {
			csv,
			align,
			indent,
			encoding,
		}) => run_table(&args, csv, align, *indent, encoding),
		None => {
			eprintln!("No subcommand specified. Run `mdgen --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<mdgen_core::MdgenError>() {
			Ok(mdgen_err) => {
				let report: miette::Report = (*mdgen_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("error: {e}");
			}
		}
		process::exit(2);
	}
}

/// Logs go to stderr so rendered output on stdout stays clean. `--verbose`
/// takes precedence over `RUST_LOG`.
fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn resolve_root(args: &MdgenCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run_init(args: &MdgenCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let manifest_path = root.join("document.toml");

	match MdgenConfig::resolve_path(&root) {
		Some(existing) => println!("Config file already exists: {}", existing.display()),
		None => {
			let config_path = root.join(CONFIG_FILE_CANDIDATES[0]);
			std::fs::write(&config_path, SAMPLE_CONFIG)?;
			println!("Created config file: {}", config_path.display());
		}
	}

	let manifest_exists = manifest_path.exists();
	if manifest_exists {
		println!("Manifest already exists: {}", manifest_path.display());
	} else {
		std::fs::write(&manifest_path, SAMPLE_MANIFEST)?;
		println!("Created manifest: {}", manifest_path.display());

		println!();
		println!("Next steps:");
		println!(
			"  1. Edit {} to describe your document",
			manifest_path.display()
		);
		println!("  2. Run `mdgen build document.toml` to render it");
	}

	Ok(())
}

/// Command line values that take precedence over `[output]` in the config.
struct BuildOverrides {
	name: Option<String>,
	out_dir: Option<PathBuf>,
	ext: Option<String>,
	encoding: Option<String>,
}

fn run_build(
	args: &MdgenCli,
	manifest: &Path,
	overrides: &BuildOverrides,
	stdout: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let mut config = MdgenConfig::load_or_default(&root)?;

	let manifest_path = root.join(manifest);
	tracing::debug!(manifest = %manifest_path.display(), "building document");
	let base_dir = manifest_path
		.parent()
		.map_or_else(|| root.clone(), Path::to_path_buf);
	let document = DocumentManifest::load(&manifest_path)?.build(&base_dir, &config)?;

	if stdout {
		println!("{}", document.render());
		return Ok(());
	}

	if let Some(out_dir) = &overrides.out_dir {
		config.output.directory.clone_from(out_dir);
	}
	if let Some(ext) = &overrides.ext {
		config.output.extension.clone_from(ext);
	}
	if let Some(encoding) = &overrides.encoding {
		config.output.encoding.clone_from(encoding);
	}
	config.output.directory = root.join(&config.output.directory);

	let name = overrides.name.clone().unwrap_or_else(|| {
		manifest_path
			.file_stem()
			.map_or_else(|| "document".to_string(), |stem| stem.to_string_lossy().to_string())
	});

	let path = write_document(&document, &name, &config.output)?;
	println!("Wrote {}", path.display());

	Ok(())
}

fn run_table(
	args: &MdgenCli,
	csv: &Path,
	align: &[ColumnAlign],
	indent: usize,
	encoding: &str,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let csv_table = CsvTable::from_path(root.join(csv), encoding)?;

	let mut table = csv_table.table().clone().with_indent(indent);
	if !align.is_empty() {
		table = table.with_alignment(align.iter().copied().map(Into::into))?;
	}

	println!("{}", table.render());

	Ok(())
}
