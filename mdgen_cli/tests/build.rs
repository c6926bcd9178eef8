mod common;

use clap::Parser;
use mdgen_cli::Commands;
use mdgen_cli::MdgenCli;
use mdgen_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;
use similar_asserts::assert_eq;

const MANIFEST: &str = "[[elements]]\ntype = \"heading\"\ntext = \"Release Notes\"\nlevel = \
                        1\n\n[[elements]]\ntype = \"unordered_list\"\nitems = [\"Faster\", \
                        \"Smaller\"]\n";

const RENDERED: &str = "# Release Notes\n\n- Faster\n- Smaller";

#[test]
fn build_writes_document_next_to_root() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("notes.toml"), MANIFEST)?;

	common::mdgen_cmd()
		.arg("build")
		.arg("notes.toml")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Wrote").and(predicates::str::contains("notes.md")));

	let content = std::fs::read_to_string(tmp.path().join("notes.md"))?;
	assert_eq!(content, RENDERED);

	Ok(())
}

#[test]
fn build_respects_config_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("notes.toml"), MANIFEST)?;
	std::fs::write(
		tmp.path().join("mdgen.toml"),
		"[output]\ndirectory = \"site/docs\"\nextension = \"markdown\"\n",
	)?;

	common::mdgen_cmd()
		.arg("build")
		.arg("notes.toml")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join("site/docs/notes.markdown"))?;
	assert_eq!(content, RENDERED);

	Ok(())
}

#[test]
fn build_flags_override_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("notes.toml"), MANIFEST)?;
	std::fs::write(
		tmp.path().join("mdgen.toml"),
		"[output]\ndirectory = \"ignored\"\nextension = \"txt\"\n",
	)?;

	common::mdgen_cmd()
		.arg("build")
		.arg("notes.toml")
		.arg("--name")
		.arg("README")
		.arg("--out-dir")
		.arg("out")
		.arg("--ext")
		.arg("md")
		.arg("--encoding")
		.arg("utf-16le")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let bytes = std::fs::read(tmp.path().join("out/README.md"))?;
	assert_eq!(&bytes[..4], &[0xFF, 0xFE, b'#', 0x00]);
	assert!(!tmp.path().join("ignored").exists());

	Ok(())
}

#[test]
fn build_to_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("notes.toml"), MANIFEST)?;

	common::mdgen_cmd()
		.arg("build")
		.arg("notes.toml")
		.arg("--stdout")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(format!("{RENDERED}\n"));

	assert!(!tmp.path().join("notes.md").exists());

	Ok(())
}

#[test]
fn build_yaml_manifest_with_csv_table() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("docs/data"))?;
	std::fs::write(tmp.path().join("docs/data/scores.csv"), "Team,Points\nOilers,10\n")?;
	std::fs::write(
		tmp.path().join("docs/scores.yaml"),
		"elements:\n  - type: heading\n    text: Scores\n    level: 2\n  - type: csv_table\n    \
		 path: data/scores.csv\n",
	)?;

	common::mdgen_cmd()
		.arg("build")
		.arg("docs/scores.yaml")
		.arg("--stdout")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("## Scores\n\n| Team   | Points |\n| ------ | ------ |\n| Oilers | 10     |\n");

	Ok(())
}

#[rstest]
#[case::invalid_heading_level(
	"bad.json",
	r#"{"elements": [{"type": "heading", "text": "Deep", "level": 7}]}"#,
	"mdgen::invalid_heading_level"
)]
#[case::unsupported_format("notes.ini", "", "mdgen::unsupported_format")]
#[case::manifest_parse("broken.yaml", "elements: [", "mdgen::manifest_parse")]
#[case::missing_csv(
	"table.toml",
	"[[elements]]\ntype = \"csv_table\"\npath = \"missing.csv\"\n",
	"mdgen::io_error"
)]
fn build_failures_exit_with_two(
	#[case] file: &str,
	#[case] content: &str,
	#[case] code: &str,
) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join(file), content)?;

	common::mdgen_cmd()
		.arg("build")
		.arg(file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains(code));

	Ok(())
}

#[test]
fn build_unknown_encoding_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("notes.toml"), MANIFEST)?;

	common::mdgen_cmd()
		.arg("build")
		.arg("notes.toml")
		.arg("--encoding")
		.arg("klingon")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("mdgen::unknown_encoding"));

	Ok(())
}

#[test]
fn missing_subcommand_exits_with_one() -> AnyEmptyResult {
	common::mdgen_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));

	Ok(())
}

#[test]
fn build_flags_parse() {
	let cli = MdgenCli::parse_from(["mdgen", "build", "doc.yaml", "--stdout", "-v"]);
	assert!(cli.verbose);
	match cli.command {
		Some(Commands::Build {
			manifest,
			name,
			stdout,
			..
		}) => {
			assert_eq!(manifest, std::path::PathBuf::from("doc.yaml"));
			assert!(name.is_none());
			assert!(stdout);
		}
		_ => panic!("expected Build command"),
	}
}
