/// Fixed material and light parameters for the gem.
///
/// Colors are RGBA. The light is directional (`w == 0`) and expressed in eye
/// space; the viewer is at infinity along +z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub light_position: [f32; 4],
    pub light_ambient: [f32; 4],
    pub light_diffuse: [f32; 4],
    pub light_specular: [f32; 4],
    pub global_ambient: [f32; 4],
    pub material_ambient: [f32; 4],
    pub material_diffuse: [f32; 4],
    pub material_specular: [f32; 4],
    pub material_shininess: f32,
}

impl Lighting {
    pub const GEM: Lighting = Lighting {
        light_position: [1.0, 1.0, 1.0, 0.0],
        light_ambient: [0.0, 0.0, 0.0, 1.0],
        light_diffuse: [1.0, 1.0, 1.0, 1.0],
        light_specular: [1.0, 1.0, 1.0, 1.0],
        global_ambient: [0.5, 0.5, 0.5, 1.0],
        material_ambient: [0.1, 0.1, 0.8, 1.0],
        material_diffuse: [0.8, 0.8, 0.8, 1.0],
        material_specular: [0.8, 0.8, 1.0, 1.0],
        material_shininess: 50.0,
    };
}

impl Default for Lighting {
    fn default() -> Self {
        Self::GEM
    }
}

pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
