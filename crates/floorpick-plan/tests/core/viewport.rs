use floorpick_plan::geometry::{ElementRect, ModelDimensions, ModelPoint, ViewportPoint};
use floorpick_plan::viewport::{self, CoordinateMapper};

#[test]
fn test_click_maps_to_model_space() {
    // 200x250 px element showing a 400x500 unit plan, offset to (100, 200)
    let rect = ElementRect::new(100.0, 200.0, 200.0, 250.0);
    let dims = ModelDimensions::new(400.0, 500.0);

    let model = viewport::to_model_space(ViewportPoint::new(110.0, 210.0), &rect, &dims).unwrap();
    assert!((model.x - 20.0).abs() < 1e-9);
    assert!((model.y - 20.0).abs() < 1e-9);
}

#[test]
fn test_element_origin_maps_to_model_origin() {
    let mapper = CoordinateMapper::new(ModelDimensions::new(489.0, 537.0));
    let rect = ElementRect::new(37.0, 91.0, 326.0, 358.0);

    let model = mapper.to_model_space(rect.origin(), &rect).unwrap();
    assert!(model.x.abs() < 1e-9);
    assert!(model.y.abs() < 1e-9);

    let far_corner = ViewportPoint::new(rect.left + rect.width, rect.top + rect.height);
    let model = mapper.to_model_space(far_corner, &rect).unwrap();
    assert!((model.x - 489.0).abs() < 1e-9);
    assert!((model.y - 537.0).abs() < 1e-9);
}

#[test]
fn test_zoomed_element_scales_down() {
    let mapper = CoordinateMapper::new(ModelDimensions::new(400.0, 500.0));
    // Same plan zoomed 2x: rect is twice as large, so each pixel covers fewer units
    let normal = ElementRect::new(0.0, 0.0, 400.0, 500.0);
    let zoomed = ElementRect::new(-200.0, -250.0, 800.0, 1000.0);

    let (sx, sy) = mapper.scale(&normal).unwrap();
    assert_eq!((sx, sy), (1.0, 1.0));
    let (sx, sy) = mapper.scale(&zoomed).unwrap();
    assert_eq!((sx, sy), (0.5, 0.5));

    // The viewport center shows the plan center in both cases
    let a = mapper.to_model_space(ViewportPoint::new(200.0, 250.0), &normal).unwrap();
    let b = mapper.to_model_space(ViewportPoint::new(200.0, 250.0), &zoomed).unwrap();
    assert!((a.x - b.x).abs() < 1e-9);
    assert!((a.y - b.y).abs() < 1e-9);
}

#[test]
fn test_points_outside_element_map_outside_plan() {
    let dims = ModelDimensions::new(400.0, 500.0);
    let mapper = CoordinateMapper::new(dims);
    let rect = ElementRect::new(100.0, 200.0, 200.0, 250.0);

    let model = mapper.to_model_space(ViewportPoint::new(90.0, 190.0), &rect).unwrap();
    assert!(model.x < 0.0 && model.y < 0.0);
    assert!(!dims.contains(&model));
}

#[test]
fn test_degenerate_rect_cannot_be_mapped() {
    let mapper = CoordinateMapper::new(ModelDimensions::new(400.0, 500.0));
    let collapsed = ElementRect::new(0.0, 0.0, 0.0, 250.0);

    assert!(mapper.to_model_space(ViewportPoint::new(1.0, 1.0), &collapsed).is_none());
    assert!(mapper.to_viewport_space(ModelPoint::new(1.0, 1.0), &collapsed).is_none());
    assert!(mapper.scale(&collapsed).is_none());
}

#[test]
fn test_degenerate_model_cannot_be_mapped() {
    let mapper = CoordinateMapper::new(ModelDimensions::new(0.0, 500.0));
    let rect = ElementRect::new(0.0, 0.0, 100.0, 100.0);
    assert!(mapper.to_model_space(ViewportPoint::new(1.0, 1.0), &rect).is_none());
}

#[test]
fn test_roundtrip_conversion() {
    let mapper = CoordinateMapper::new(ModelDimensions::new(595.28, 841.89));
    let rect = ElementRect::new(12.5, -340.0, 1190.56, 1683.78);

    let original = ModelPoint::new(123.45, 456.78);
    let pixel = mapper.to_viewport_space(original, &rect).unwrap();
    let roundtrip = mapper.to_model_space(pixel, &rect).unwrap();

    assert!((roundtrip.x - original.x).abs() < 1e-9);
    assert!((roundtrip.y - original.y).abs() < 1e-9);
}

#[test]
fn test_marker_position_for_table_center() {
    let mapper = CoordinateMapper::new(ModelDimensions::new(400.0, 500.0));
    let rect = ElementRect::new(100.0, 200.0, 200.0, 250.0);

    let marker = mapper.to_viewport_space(ModelPoint::new(20.0, 20.0), &rect).unwrap();
    assert!((marker.x - 110.0).abs() < 1e-9);
    assert!((marker.y - 210.0).abs() < 1e-9);
}

#[test]
fn test_display() {
    let mapper = CoordinateMapper::new(ModelDimensions::new(400.0, 500.0));
    assert_eq!(mapper.to_string(), "Model: 400.00x500.00");
}
