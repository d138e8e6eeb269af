pub fn handle_home() {
    println!("Job Application Tracker");
    println!();
    println!("One place for all the hassles.");
    println!("Organize your job hunting process and enhance efficiency.");
    println!();
    println!("  jt view       browse entries with filters");
    println!("  jt dashboard  manage entries interactively");
    println!("  jt --help     full command list");
}
