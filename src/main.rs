fn main() -> anyhow::Result<()> {
    pypc::run()
}
