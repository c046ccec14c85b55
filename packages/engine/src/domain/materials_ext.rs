use super::materials::Material;
#[cfg(test)]
use super::materials::Category;

/// Fluids a falling particle may sink through. Lava is too viscous to count.
#[inline]
pub fn is_liquid(m: Material) -> bool {
    matches!(m, Material::Water | Material::Oil | Material::Acid)
}

/// Heat sources that set off gunpowder.
#[inline]
pub fn is_igniter(m: Material) -> bool {
    matches!(m, Material::Fire | Material::Lava)
}

/// Materials that rise (negative vertical velocity).
#[cfg(test)]
pub(crate) fn rises(m: Material) -> bool {
    matches!(m.category(), Category::Gas | Category::Energy)
}

/// Materials that fall (positive vertical velocity).
#[cfg(test)]
pub(crate) fn falls(m: Material) -> bool {
    matches!(m.category(), Category::Powder | Category::Liquid)
}
