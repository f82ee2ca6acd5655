//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A 3x3 matrix used to transform the components of a color.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: &Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(
        components.0,
        components.1,
        components.2,
    ));
    Components(x, y, z)
}

/// Build a [`Transform`] from the 9 components of a 3x3 matrix.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Normalize a hue, given in degrees, into the range [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    hue - 360.0 * (hue / 360.0).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_hue_wraps_into_a_single_turn() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(540.0), 180.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
    }

    #[test]
    fn transform_uses_row_vector_convention() {
        // Rows of the matrix are the images of the basis vectors.
        let swap_x_y = transform_3x3(
            0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        let result = transform(&swap_x_y, &Components(1.0, 2.0, 3.0));
        assert_eq!(result, Components(2.0, 1.0, 3.0));
    }
}
