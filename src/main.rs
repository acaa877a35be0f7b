fn main() {
    if let Err(err) = food_diary_lib::run() {
        eprintln!("food-diary: {err:#}");
        std::process::exit(1);
    }
}
