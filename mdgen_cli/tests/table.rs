mod common;

use clap::Parser;
use mdgen_cli::ColumnAlign;
use mdgen_cli::Commands;
use mdgen_cli::MdgenCli;
use mdgen_core::AnyEmptyResult;

#[test]
fn table_prints_markdown() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("scores.csv"), "Team,Points\nOilers,10\nFlames,7\n")?;

	common::mdgen_cmd()
		.arg("table")
		.arg("scores.csv")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(
			"| Team   | Points |\n| ------ | ------ |\n| Oilers | 10     |\n| Flames | 7      |\n",
		);

	Ok(())
}

#[test]
fn table_with_alignment_and_indent() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("scores.csv"), "Team,Points\nOilers,10\n")?;

	common::mdgen_cmd()
		.arg("table")
		.arg("scores.csv")
		.arg("--align")
		.arg("left,right")
		.arg("--indent")
		.arg("2")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("  | Team   | Points |\n  | :----- | -----: |\n  | Oilers | 10     |\n");

	Ok(())
}

#[test]
fn table_with_legacy_encoding() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("menu.csv"), b"Name\nCaf\xe9\n")?;

	common::mdgen_cmd()
		.arg("table")
		.arg("menu.csv")
		.arg("--encoding")
		.arg("windows-1252")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("| Café |"));

	Ok(())
}

#[test]
fn table_alignment_count_mismatch_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("scores.csv"), "Team,Points\nOilers,10\n")?;

	common::mdgen_cmd()
		.arg("table")
		.arg("scores.csv")
		.arg("--align")
		.arg("center")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("mdgen::alignment_mismatch"));

	Ok(())
}

#[test]
fn table_row_width_mismatch_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("bad.csv"), "a,b\n1,2,3\n")?;

	common::mdgen_cmd()
		.arg("table")
		.arg("bad.csv")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains(
			"unable to add row with width 3 to table with header of width 2",
		));

	Ok(())
}

#[test]
fn table_alignment_flag_parses_list() {
	let cli = MdgenCli::parse_from(["mdgen", "table", "data.csv", "--align", "left,center,right"]);
	match cli.command {
		Some(Commands::Table {
			align,
			indent,
			encoding,
			..
		}) => {
			assert!(matches!(
				align.as_slice(),
				[ColumnAlign::Left, ColumnAlign::Center, ColumnAlign::Right]
			));
			assert_eq!(indent, 0);
			assert_eq!(encoding, "utf-8");
		}
		_ => panic!("expected Table command"),
	}
}
