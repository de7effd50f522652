fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);

    // Echo proto (server for the service, client for tests and tooling)
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("echo_descriptor.bin"))
        .compile_protos(&["../proto/echospec/echo.proto"], &["../proto"])?;

    println!("cargo:rerun-if-changed=../proto/echospec/echo.proto");

    Ok(())
}
