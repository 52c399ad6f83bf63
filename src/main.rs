use voxel::config::Config;
use voxel::driver;
use voxel::error::Result;
use voxel::scene::Scene;
use voxel::window::Window;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let mut scene = Scene::from_config(&config)?;
    let mut window = Window::new(&config)?;

    log::info!(
        "{} voxels; arrows select, WASD move, UJ/YI/HK rotate, R/T scale",
        scene.voxel_count()
    );

    driver::run(&mut scene, &mut window)?;
    Ok(())
}
