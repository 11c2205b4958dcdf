// sqlx::migrate! embeds the SQL files at compile time, so edits to them
// must invalidate the build.
fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
