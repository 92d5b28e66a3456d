use crate::{
    puzzle::{Cursor, HexMap},
    render::{Color3, GridRenderer, Point2},
};
use svg::{
    node::{element::Polygon, Comment},
    Document,
};

const CELL_STROKE_COLOR: Color3 = Color3::new_int(255, 255, 255);
const CURSOR_COLOR: Color3 = Color3::new_int(0, 0, 0);

/// Render one frame of a grid as an SVG: every cell at its current (possibly
/// mid-rotation) position, plus the cursor outline on top. This is a 2D
/// top-down rendering, in full color.
pub fn grid_to_svg(
    map: &HexMap,
    cursor: &Cursor,
    renderer: &GridRenderer,
) -> Document {
    // Set the view box based on the grid size. Each of these values is the
    // distance from the center of the viewbox to the outer edge, so the
    // width/height will be double that. The extra cell of slack covers cells
    // that are mid-arc, which can swing slightly outside their slots.
    let radius = map.config().radius as f64;
    let hex_size = renderer.render_config().hex_size;
    let view_box_max = ((radius + 2.0) * 2.0 * hex_size).ceil();

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                // Top-left corner
                -view_box_max,
                -view_box_max,
                // Width and height
                view_box_max * 2.0,
                view_box_max * 2.0,
            ),
        )
        .add(Comment::new(format!("\n{:#?}\n", map.config())));

    for (pos, color, center) in renderer.frame(map) {
        document = document
            .add(Comment::new(pos.to_string())) // Readability!
            .add(
                Polygon::new()
                    .set("points", corner_points(renderer, center))
                    .set("fill", color.to_html())
                    .set("stroke", CELL_STROKE_COLOR.to_html())
                    .set("stroke-width", 1),
            );
    }

    for center in renderer.cursor_outline(cursor) {
        document = document.add(
            Polygon::new()
                .set("points", corner_points(renderer, center))
                .set("fill", "none")
                .set("stroke", CURSOR_COLOR.to_html())
                .set("stroke-width", 3),
        );
    }

    document
}

/// Generate the vertex attribute for one hexagon centered at `center`
fn corner_points(renderer: &GridRenderer, center: Point2) -> Vec<(f64, f64)> {
    renderer
        .hex_corners(center)
        .iter()
        .map(|corner| (corner.x, corner.y))
        .collect()
}
