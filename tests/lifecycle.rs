//! Runtime initialization, data directories and shutdown.
//!
//! Kept in one test because the runtime is process-wide.

use std::fs;

use neardupe::prelude::*;
use tempfile::TempDir;

#[test]
fn test_runtime_lifecycle() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(neardupe::initialize());
    assert!(neardupe::is_initialized());
    assert_eq!(neardupe::normalize_name_default("IV")?, vec!["AF", "iv", "4"]);

    // A data directory replacing the English dictionary: "blvd" only
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("dictionaries"))?;
    fs::write(
        dir.path().join("dictionaries").join("en.json"),
        r#"[
            {"phrase": "blvd", "canonical": "boulevard", "kind": "street_type", "components": 8},
            {"phrase": "the", "canonical": "the", "kind": "stopword"}
        ]"#,
    )?;
    neardupe::initialize_from(dir.path())?;

    let mut options = NearDupeHashOptions::none();
    options.with_address = true;
    options.with_postal_code = true;
    options.address_only_keys = true;
    let keys = neardupe::near_dupe_hashes_languages(
        &["house_number", "road", "postcode"],
        &["5", "Sunset Blvd", "90028"],
        &options,
        &["en"],
    )?;
    assert_eq!(
        keys,
        vec!["apc|sunset boulevard|5|90028", "apc|sunset|5|90028"]
    );
    let keys = neardupe::near_dupe_hashes_languages(
        &["house_number", "road", "postcode"],
        &["5", "Main St", "90028"],
        &options,
        &["en"],
    )?;
    assert_eq!(keys, vec!["apc|main st|5|90028"]);

    // A broken directory leaves the running engine in place
    let broken = TempDir::new()?;
    fs::write(broken.path().join("countries.json"), "{not json")?;
    assert!(matches!(
        neardupe::initialize_from(broken.path()),
        Err(NearDupeError::ResourceLoad(_))
    ));
    assert!(neardupe::is_initialized());

    neardupe::shutdown();
    assert!(!neardupe::is_initialized());
    assert!(matches!(
        neardupe::normalize_name_default("IV"),
        Err(NearDupeError::NotInitialized(_))
    ));
    assert!(matches!(
        neardupe::place_languages(&["city"], &["Paris"]),
        Err(NearDupeError::NotInitialized(_))
    ));

    assert!(neardupe::initialize());
    assert_eq!(
        neardupe::place_languages(&["city", "country"], &["Paris", "France"])?,
        vec!["fr"]
    );
    Ok(())
}
