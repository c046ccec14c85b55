mod age;
mod cell_ops;
mod material_color;
mod unchecked;
mod updated;
mod velocity;
