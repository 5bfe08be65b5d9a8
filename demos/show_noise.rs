//! An example for displaying noise as an image.

use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};
use lattice_noise::prelude::*;

fn main() -> AppExit {
    println!(
        r#"
        ---SHOW NOISE EXAMPLE---

        Controls:
        - Right arrow and left arrow change noise types.
        - A and D change noise scale. Image resolution doesn't change so there are limits.
        - B changes the noise mode (ex: image, image3d, image4d)

        "#
    );
    App::new()
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup)
        .add_systems(Update, update_system)
        .run()
}

fn setup(mut commands: Commands, mut images: ResMut<Assets<Image>>, time: Res<Time>) {
    let mut noise = NoiseOptions {
        options2d: vec![
            NoiseOption {
                name: "Perlin noise",
                noise: Box::new(Noise::<(Perlin, SNormToUNorm)>::default()),
            },
            NoiseOption {
                name: "Tiling perlin noise (8 cells)",
                noise: Box::new(Noise::from((
                    Perlin::periodic(Vec2::splat(8.0)),
                    SNormToUNorm,
                ))),
            },
            NoiseOption {
                name: "Simplex noise",
                noise: Box::new(Noise::<(Simplex, SNormToUNorm)>::default()),
            },
        ],
        options3d: vec![
            NoiseOption {
                name: "Perlin noise",
                noise: Box::new(Noise::<(Perlin, SNormToUNorm)>::default()),
            },
            NoiseOption {
                name: "Tiling perlin noise (8 cells)",
                noise: Box::new(Noise::from((
                    Perlin::periodic(Vec3::splat(8.0)),
                    SNormToUNorm,
                ))),
            },
            NoiseOption {
                name: "Simplex noise",
                noise: Box::new(Noise::<(Simplex, SNormToUNorm)>::default()),
            },
        ],
        options4d: vec![
            NoiseOption {
                name: "Perlin noise",
                noise: Box::new(Noise::<(Perlin, SNormToUNorm)>::default()),
            },
            NoiseOption {
                name: "Tiling perlin noise (8 cells)",
                noise: Box::new(Noise::from((
                    Perlin::periodic(Vec4::splat(8.0)),
                    SNormToUNorm,
                ))),
            },
            NoiseOption {
                name: "Simplex noise",
                noise: Box::new(Noise::<(Simplex, SNormToUNorm)>::default()),
            },
        ],
        selected: 0,
        image: Handle::default(),
        time_scale: 10.0,
        wavelength: 32.0,
        mode: ExampleMode::Image,
    };
    let image = Image::new_fill(
        Extent3d {
            width: 1920,
            height: 1080,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[255, 255, 255, 255, 255, 255, 255, 255],
        TextureFormat::Rgba16Unorm,
        RenderAssetUsages::all(),
    );
    let handle = images.add(image);
    noise.image = handle.clone();
    noise.update(&mut images, &time, true);
    commands.spawn((
        ImageNode {
            image: handle,
            ..Default::default()
        },
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..Default::default()
        },
    ));
    commands.spawn(Camera2d);
    commands.insert_resource(noise);
}

fn update_system(
    mut noise: ResMut<NoiseOptions>,
    mut images: ResMut<Assets<Image>>,
    time: Res<Time>,
    input: Res<ButtonInput<KeyCode>>,
) {
    let mut changed = false;

    if input.just_pressed(KeyCode::ArrowRight) {
        noise.selected = noise.selected.wrapping_add(1) % noise.options2d.len();
        changed = true;
    }
    if input.just_pressed(KeyCode::ArrowLeft) {
        noise.selected = noise
            .selected
            .checked_sub(1)
            .map(|v| v % noise.options2d.len())
            .unwrap_or(noise.options2d.len() - 1);
        changed = true;
    }

    if input.just_pressed(KeyCode::KeyD) {
        noise.wavelength *= 2.0;
        changed = true;
    }
    if input.just_pressed(KeyCode::KeyA) {
        noise.wavelength *= 0.5;
        changed = true;
    }

    if input.just_pressed(KeyCode::KeyB) {
        noise.mode = noise.mode.change();
        changed = true;
    }

    noise.update(&mut images, &time, changed);
}

/// Holds a version of the noise
pub struct NoiseOption<V> {
    name: &'static str,
    noise: Box<dyn DynamicSampleable<V, f32> + Send + Sync>,
}

/// Centers the image on the origin, with y up.
fn pixel_location(image: &Image, x: u32, y: u32) -> Vec2 {
    Vec2::new(
        x as f32 - (image.width() / 2) as f32,
        -(y as f32 - (image.height() / 2) as f32),
    )
}

fn paint(image: &mut Image, mut sample: impl FnMut(Vec2) -> f32) {
    for x in 0..image.width() {
        for y in 0..image.height() {
            let out = sample(pixel_location(image, x, y));
            let color = Color::linear_rgb(out, out, out);
            if let Err(err) = image.set_color_at(x, y, color) {
                warn!("Failed to set image color with error: {err:?}");
            }
        }
    }
}

/// Holds the current noise
#[derive(Resource)]
pub struct NoiseOptions {
    options2d: Vec<NoiseOption<Vec2>>,
    options3d: Vec<NoiseOption<Vec3>>,
    options4d: Vec<NoiseOption<Vec4>>,
    selected: usize,
    mode: ExampleMode,
    time_scale: f32,
    image: Handle<Image>,
    wavelength: f32,
}

impl NoiseOptions {
    fn update(&mut self, images: &mut Assets<Image>, time: &Time, changed: bool) {
        let Some(image) = images.get_mut(self.image.id()) else {
            warn!("The noise image is missing.");
            return;
        };
        let z = time.elapsed_secs() * self.time_scale;
        let w = time.elapsed_secs() * core::f32::consts::E * -self.time_scale;
        let name = match self.mode {
            ExampleMode::Image if changed => {
                let selected = self.selected % self.options2d.len();
                let noise = &mut self.options2d[selected];
                noise.noise.set_wavelength(self.wavelength);
                paint(image, |loc| noise.noise.sample_dyn(loc));
                Some(noise.name)
            }
            ExampleMode::Image3d => {
                let selected = self.selected % self.options3d.len();
                let noise = &mut self.options3d[selected];
                noise.noise.set_wavelength(self.wavelength);
                paint(image, |loc| noise.noise.sample_dyn(loc.extend(z)));
                changed.then_some(noise.name)
            }
            ExampleMode::Image4d => {
                let selected = self.selected % self.options4d.len();
                let noise = &mut self.options4d[selected];
                noise.noise.set_wavelength(self.wavelength);
                paint(image, |loc| noise.noise.sample_dyn(loc.extend(z).extend(w)));
                changed.then_some(noise.name)
            }
            ExampleMode::Image => None,
        };
        if let Some(name) = name {
            info!(
                "Updated {} {:?}, wavelength: {}.",
                name, self.mode, self.wavelength
            );
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ExampleMode {
    Image,
    Image3d,
    Image4d,
}

impl ExampleMode {
    fn change(&self) -> Self {
        match *self {
            ExampleMode::Image => ExampleMode::Image3d,
            ExampleMode::Image3d => ExampleMode::Image4d,
            ExampleMode::Image4d => ExampleMode::Image,
        }
    }
}
