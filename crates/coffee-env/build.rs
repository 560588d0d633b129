use std::env;
use std::fs;
use std::path::Path;

/// Build-time values, each overridable through the build environment or a `.env` file.
const BUILD_VARS: &[(&str, &str)] = &[
    ("COFFEE_ENV_API_SERVER_URL", "http://127.0.0.1:5000"),
    ("COFFEE_ENV_AUTH0_URL", "dev-92ouxsny.us"),
    ("COFFEE_ENV_AUTH0_AUDIENCE", "coffee"),
    ("COFFEE_ENV_AUTH0_CLIENT_ID", "eNShERhGNp1pd0sibs6tvTweBUqgJh6z"),
    ("COFFEE_ENV_AUTH0_CALLBACK_URL", "https://127.0.0.1:8100"),
];

fn main() {
    // A missing .env is the normal case
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=COFFEE_ENV_PRODUCTION");

    let mut generated = String::from("// @generated by build.rs\n\n");

    let production = match env::var("COFFEE_ENV_PRODUCTION") {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            other => panic!("COFFEE_ENV_PRODUCTION must be a boolean, got {other:?}"),
        },
        Err(_) => false,
    };
    generated.push_str(&format!(
        "/// Deployment mode baked in at build time\npub const PRODUCTION: bool = {production};\n"
    ));

    for (var, fallback) in BUILD_VARS {
        println!("cargo:rerun-if-env-changed={var}");
        let value = env::var(var).unwrap_or_else(|_| fallback.to_string());
        let name = var.trim_start_matches("COFFEE_ENV_");
        generated.push_str(&format!("pub const {name}: &str = {value:?};\n"));
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("build_constants.rs");
    fs::write(dest, generated).expect("failed to write build_constants.rs");
}
