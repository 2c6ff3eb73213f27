mod cornell_box;
mod random_spheres;

use glint::error::SceneError;
use glint::scene::Scene;

#[allow(dead_code)]
pub enum ScenesType {
    CornellBox,
    RandomSpheres,
}

pub fn get(scene_type: ScenesType, aspect_ratio: f32) -> Result<Scene, SceneError> {
    match scene_type {
        ScenesType::CornellBox => self::cornell_box::scene(aspect_ratio),
        ScenesType::RandomSpheres => self::random_spheres::scene(aspect_ratio),
    }
}
