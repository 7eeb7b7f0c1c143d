use anyhow::Result;

fn main() -> Result<()> {
    catchat::desktop::run(catchat::LauncherOptions::default())
}
