use log::LevelFilter;

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("USERS_REPORT_LOG", "warn"))
        .init();

    match users_report::run() {
        Ok(path) => println!("File {} has been created successfully.", path.display()),
        Err(err) => {
            eprintln!("Error while creating the report: {err:#}");
            std::process::exit(1);
        }
    }
}
