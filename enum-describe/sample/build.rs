fn main() -> Result<(), enum_describe::GenerateError> {
    enum_describe::build::generate()?;
    Ok(())
}
