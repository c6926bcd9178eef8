mod common;

use mdgen_core::AnyEmptyResult;
use similar_asserts::assert_eq;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let assert = common::mdgen_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();
	assert
		.stdout(predicates::str::contains("Created config file"))
		.stdout(predicates::str::contains("Created manifest"));

	let config_content = std::fs::read_to_string(tmp.path().join("mdgen.toml"))?;
	assert!(config_content.contains("[output]"));
	assert!(config_content.contains("[defaults]"));

	let manifest_content = std::fs::read_to_string(tmp.path().join("document.toml"))?;
	assert!(manifest_content.contains("[[elements]]"));

	Ok(())
}

#[test]
fn init_does_not_overwrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config_path = tmp.path().join(".mdgen.toml");
	std::fs::write(&config_path, "existing config")?;
	let manifest_path = tmp.path().join("document.toml");
	std::fs::write(&manifest_path, "existing manifest")?;

	common::mdgen_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert_eq!(std::fs::read_to_string(&config_path)?, "existing config");
	assert_eq!(std::fs::read_to_string(&manifest_path)?, "existing manifest");
	assert!(!tmp.path().join("mdgen.toml").exists());

	Ok(())
}

#[test]
fn init_creates_buildable_manifest() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::mdgen_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let config = mdgen_core::config::MdgenConfig::load_or_default(tmp.path())?;
	assert_eq!(config.defaults.toc_levels(), 2..=3);

	let manifest = mdgen_core::manifest::DocumentManifest::load(&tmp.path().join("document.toml"))?;
	let document = manifest.build(tmp.path(), &config)?;
	assert_eq!(
		document.render(),
		"# My Document\n\n1. [Getting Started](#getting-started)\n\n## Getting Started\n\nGenerated \
		 with mdgen.\n\n- [ ] Edit document.toml\n- [ ] Run mdgen build"
	);

	Ok(())
}
