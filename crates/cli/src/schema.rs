use dslscope_resolve::TypeUniverse;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(TypeUniverse);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
