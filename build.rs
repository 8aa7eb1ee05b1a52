use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/settlement.proto");
    println!("cargo:rerun-if-changed=proto/generated/settlement.rs");
    match tonic_build::compile_protos("proto/settlement.proto") {
        Ok(()) => Ok(()),
        Err(protoc_err) => {
            // protoc is not available in every build environment; fall back to
            // the vendored pre-generated module so the build still succeeds.
            let out_dir = std::env::var("OUT_DIR")?;
            std::fs::copy(
                Path::new("proto/generated/settlement.rs"),
                Path::new(&out_dir).join("settlement.rs"),
            )
            .map_err(|copy_err| {
                format!(
                    "protoc unavailable ({protoc_err}) and vendored fallback copy failed: {copy_err}"
                )
            })?;
            Ok(())
        }
    }
}
