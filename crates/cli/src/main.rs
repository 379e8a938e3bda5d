fn main() -> Result<(), Box<dyn std::error::Error>> {
    dslscope_cli::run()
}
