mod design_inputs;
mod plant_layout;

pub use design_inputs::DesignInputs;
pub use plant_layout::PlantLayout;
