mod primitives;

pub use primitives::PrimitiveData;

use crate::camera::PinholeCamera;
use crate::error::Error;
use crate::material::Material;
use crate::math::Point3;
use crate::scene::Scene;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct CameraData {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub position: Option<[f32; 3]>,
}

/// On-disk scene description: camera, a library of named flat colors, and a
/// list of primitives referring to materials by name.
#[derive(Clone, Serialize, Deserialize)]
pub struct SceneData {
    pub camera: CameraData,
    pub materials_lib: HashMap<String, [f32; 3]>,
    pub primitives: Vec<PrimitiveData>,
}

impl SceneData {
    /// Lowers the description into a renderable camera and scene, resolving
    /// material names to arena indices.
    pub fn build(self) -> Result<(PinholeCamera, Scene), Box<dyn StdError + Send + Sync>> {
        let camera = match self.camera.position {
            Some(position) => PinholeCamera::with_position(
                self.camera.width,
                self.camera.height,
                Point3::from(position),
            ),
            None => PinholeCamera::new(self.camera.width, self.camera.height),
        }?;

        let mut material_name_to_id = HashMap::new();
        let mut scene = Scene::new();
        for (name, channels) in self.materials_lib {
            let id = scene.add_material(Material::from(channels));
            material_name_to_id.insert(name, id);
        }

        for primitive in self.primitives {
            let material = primitive.material_name();
            let id = *material_name_to_id
                .get(material)
                .ok_or_else(|| Error::UnknownMaterial(material.to_string()))?;
            scene.add_primitive(primitive.transform(id)?);
        }

        Ok((camera, scene))
    }
}

pub fn load_json<T>(path: impl AsRef<Path>) -> Result<T, Box<dyn StdError + Send + Sync>>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path).and_then(|mut f| f.read_to_string(&mut input))?;
    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}
