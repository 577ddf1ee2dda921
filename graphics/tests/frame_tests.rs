//! Frame-level integration tests for the graphics crate.
//!
//! These tests drive the public API the way a renderer does over a frame:
//! camera upload, target binding and clearing, full-screen passes, and the
//! profiling markers around them. Everything records into a `DummyContext`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test frame_tests
//! ```

mod common;

use rstest::rstest;

use common::{
    DEPTH, GBUFFER0, GBUFFER1, GBUFFER2, REFLECTION_PROBE, camera_at, context, count,
    parameter_names,
};
use framekit_core::math::{Mat4, Vec3, orthographic_rh};
use framekit_graphics::camera::CAMERA_PARAMETERS;
use framekit_graphics::{
    CameraState, ClearFlag, Color, Command, ComputeShader, CubemapFace, FullScreenPass,
    GraphicsError, Material, MaterialPropertyBlock, ProfilingSample, RenderContext, RenderTargetId,
    RenderTargetSet, RenderTargetSetup, clear_cubemap, flatten_matrix, override_global_camera,
    set_render_target, setup_compute_camera, setup_global_camera,
};

// ============================================================================
// Render target binding
// ============================================================================

#[rstest]
#[case::none(ClearFlag::NONE, None)]
#[case::color(ClearFlag::COLOR, Some((false, true)))]
#[case::depth(ClearFlag::DEPTH, Some((true, false)))]
#[case::all(ClearFlag::ALL, Some((true, true)))]
fn test_clear_flag_controls_clear(#[case] flag: ClearFlag, #[case] expected: Option<(bool, bool)>) {
    let mut ctx = context();
    let setup = RenderTargetSetup::new(RenderTargetSet::color_depth(GBUFFER0, DEPTH)).with_clear(flag);
    set_render_target(&mut ctx, &setup);

    let executed = ctx.executed();
    assert_eq!(ctx.submission_count(), 1);
    assert!(matches!(executed[0], Command::SetRenderTarget { .. }));

    let clears: Vec<(bool, bool)> = executed
        .iter()
        .filter_map(|c| match c {
            Command::ClearRenderTarget { depth, color, .. } => Some((*depth, *color)),
            _ => None,
        })
        .collect();
    assert_eq!(clears, expected.into_iter().collect::<Vec<_>>());
}

#[test]
fn test_mrt_bind_and_clear_end_to_end() {
    let mut ctx = context();
    let setup = RenderTargetSetup::new(RenderTargetSet::multiple(&[GBUFFER0, GBUFFER1], None))
        .with_clear(ClearFlag::COLOR)
        .with_clear_color(Color::new(0.0, 0.0, 0.0, 1.0));
    set_render_target(&mut ctx, &setup);

    assert_eq!(
        ctx.executed(),
        &[
            Command::SetRenderTarget {
                colors: vec![GBUFFER0, GBUFFER1],
                depth: Some(GBUFFER0),
                mip_level: 0,
                face: CubemapFace::Unknown,
            },
            Command::ClearRenderTarget {
                depth: false,
                color: true,
                value: Color::new(0.0, 0.0, 0.0, 1.0),
            },
        ]
    );
}

#[test]
fn test_cubemap_clear_is_one_submission_of_six_faces() {
    let mut ctx = context();
    let color = Color::new(0.1, 0.2, 0.3, 1.0);
    clear_cubemap(&mut ctx, REFLECTION_PROBE, color);

    assert_eq!(ctx.submission_count(), 1);
    let faces: Vec<CubemapFace> = ctx
        .executed()
        .iter()
        .filter_map(|c| match c {
            Command::SetRenderTarget { face, .. } => Some(*face),
            _ => None,
        })
        .collect();
    assert_eq!(faces, CubemapFace::ALL.to_vec());
    assert_eq!(
        faces.iter().map(|f| f.index()).collect::<Vec<_>>(),
        (0..6).map(Some).collect::<Vec<_>>()
    );
    assert_eq!(
        count(ctx.executed(), |c| matches!(
            c,
            Command::ClearRenderTarget { depth: false, color: true, value } if *value == color
        )),
        6
    );
}

// ============================================================================
// Camera broadcast
// ============================================================================

#[rstest]
#[case::near(Vec3::new(0.0, 1.0, 3.0))]
#[case::far(Vec3::new(40.0, 25.0, -60.0))]
fn test_three_sinks_agree(#[case] eye: Vec3) {
    let camera = camera_at(eye);

    let mut global = context();
    global.submit(|cmd| setup_global_camera(&camera, cmd));

    let mut material = Material::new("Hidden/ShadowCaster");
    override_global_camera(&camera, &mut material);

    let shader = ComputeShader::new("TileLightCulling");
    let mut compute = context();
    compute.submit(|cmd| setup_compute_camera(&camera, &shader, cmd));

    let expected: Vec<String> = CAMERA_PARAMETERS.iter().map(|s| s.to_string()).collect();
    assert_eq!(parameter_names(global.executed()), expected);
    assert_eq!(parameter_names(compute.executed()), expected);
    assert_eq!(material.properties().len(), 9);

    for name in CAMERA_PARAMETERS {
        let Some(matrix) = global.globals().matrix(name) else {
            continue;
        };
        assert_eq!(material.properties().matrix(name), Some(matrix));

        let uploaded = compute.executed().iter().find_map(|c| match c {
            Command::SetComputeParam { name: n, value, .. } if n == name => value.as_float_array(),
            _ => None,
        });
        assert_eq!(uploaded, Some(&flatten_matrix(matrix)[..]), "{name}");
    }
}

#[test]
fn test_material_override_leaves_globals_untouched() {
    let mut ctx = context();
    let main = camera_at(Vec3::new(0.0, 2.0, 6.0));
    let shadow = camera_at(Vec3::new(10.0, 30.0, 10.0));
    ctx.submit(|cmd| setup_global_camera(&main, cmd));

    let mut caster = Material::new("Hidden/ShadowCaster");
    override_global_camera(&shadow, &mut caster);

    assert_eq!(ctx.globals().matrix("_ViewMatrix"), Some(main.view()));
    assert_eq!(caster.properties().matrix("_ViewMatrix"), Some(shadow.view()));
}

#[rstest]
#[case::from_light(0.0)]
#[case::offset_near(1.0)]
fn test_orthographic_shadow_camera_uploads_finite_params(#[case] near: f32) {
    let light_view = framekit_core::math::look_at_rh(
        &Vec3::new(20.0, 40.0, 20.0),
        &Vec3::zeros(),
        &Vec3::y(),
    );
    let shadow = CameraState::new(
        light_view,
        orthographic_rh(-25.0, 25.0, -25.0, 25.0, near, 120.0),
        2048,
        2048,
    );
    assert!(shadow.is_orthographic());

    let mut caster = Material::new("Hidden/ShadowCaster");
    override_global_camera(&shadow, &mut caster);

    let param = caster
        .properties()
        .vector("_InvProjParam")
        .expect("inverse projection params written");
    assert!(param.iter().all(|v| v.is_finite()), "{param:?}");

    // Light-space depth at the scene origin linearizes back to its view z.
    let origin_view = light_view * framekit_core::math::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let clip = shadow.proj() * origin_view;
    let linear = param.z * (clip.z / clip.w) + param.w;
    assert!((linear - origin_view.z).abs() < 1e-3, "{linear} vs {}", origin_view.z);
}

#[test]
fn test_previous_view_projection_follows_frames() {
    let mut ctx = context();
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 5.0));
    let first = *camera.view_proj();

    ctx.submit(|cmd| setup_global_camera(&camera, cmd));
    assert_eq!(ctx.globals().matrix("_PrevViewProjMatrix"), Some(&first));

    let moved = framekit_core::math::look_at_rh(&Vec3::new(1.0, 0.0, 5.0), &Vec3::zeros(), &Vec3::y());
    camera.update(moved, *camera.proj(), 1280, 720);
    ctx.submit(|cmd| setup_global_camera(&camera, cmd));

    assert_eq!(ctx.globals().matrix("_PrevViewProjMatrix"), Some(&first));
    assert_eq!(ctx.globals().matrix("_ViewProjMatrix"), Some(camera.view_proj()));
}

// ============================================================================
// Full-screen passes
// ============================================================================

#[rstest]
#[case::two(&[GBUFFER0, GBUFFER1])]
#[case::three(&[GBUFFER0, GBUFFER1, GBUFFER2])]
#[case::reordered(&[GBUFFER2, GBUFFER0, GBUFFER1])]
fn test_mrt_without_depth_binds_first_color(#[case] colors: &[RenderTargetId]) {
    let mut ctx = context();
    let pass = FullScreenPass::new(&Material::new("Hidden/DeferredLighting"));
    ctx.submit(|cmd| pass.draw_to_targets_without_depth(cmd, colors));

    match &ctx.executed()[0] {
        Command::SetRenderTarget { colors: bound, depth, .. } => {
            assert_eq!(bound.as_slice(), colors);
            assert_eq!(*depth, Some(colors[0]));
        }
        other => panic!("expected a bind, got {other:?}"),
    }
}

#[test]
fn test_post_process_frame() {
    let mut ctx = context();
    let camera = camera_at(Vec3::new(0.0, 1.0, 4.0));
    let tonemap = Material::new("Hidden/Tonemap");
    let block = MaterialPropertyBlock::new().with_float("_Exposure", 0.8);
    let pass = FullScreenPass::new(&tonemap).with_properties(&block);
    let backbuffer = RenderTargetId::new(1, framekit_graphics::TextureFormat::Bgra8Unorm);

    {
        let mut sample = ProfilingSample::new(&mut ctx, "PostProcess");
        sample.context().submit(|cmd| {
            setup_global_camera(&camera, cmd);
            pass.draw_to_color(cmd, backbuffer);
        });
    }

    let executed = ctx.executed();
    assert_eq!(ctx.submission_count(), 3);
    assert_eq!(executed.first(), Some(&Command::BeginSample("PostProcess".into())));
    assert_eq!(executed.last(), Some(&Command::EndSample("PostProcess".into())));
    assert_eq!(count(executed, |c| matches!(c, Command::SetGlobal { .. })), 9);

    let draw = executed.iter().find_map(|c| match c {
        Command::DrawProcedural(draw) => Some(draw),
        _ => None,
    });
    let draw = draw.expect("full-screen draw recorded");
    assert_eq!(draw.vertex_count, 3);
    assert_eq!(draw.instance_count, 1);
    assert_eq!(draw.transform, Mat4::identity());
    assert_eq!(draw.material, tonemap.id());
    assert_eq!(draw.properties.as_ref(), Some(&block));
    assert!(!executed.iter().any(|c| matches!(c, Command::ClearRenderTarget { .. })));
}

#[test]
fn test_checked_draw_rejects_depth_target() {
    let mut ctx = context();
    let pass = FullScreenPass::new(&Material::new("Hidden/Blit"));

    let mut result = Ok(());
    ctx.submit(|cmd| result = pass.try_draw_to_targets_without_depth(cmd, &[DEPTH, GBUFFER0]));

    assert!(matches!(result, Err(GraphicsError::InvalidParameter(_))));
    assert!(ctx.executed().is_empty());
}

// ============================================================================
// Compute uploads
// ============================================================================

#[test]
fn test_compute_array_upload_after_longer_upload() {
    let mut ctx = context();
    let shader = ComputeShader::new("ShadowCascades");
    let cascades = [Mat4::identity() * 2.0; 4];

    ctx.submit(|cmd| {
        framekit_graphics::flatten::set_matrix_array_cs(cmd, &shader, "_Cascades", &cascades);
        framekit_graphics::flatten::set_matrix_array_cs(cmd, &shader, "_Cascades", &cascades[..1]);
    });

    let lens: Vec<usize> = ctx
        .executed()
        .iter()
        .filter_map(|c| match c {
            Command::SetComputeParam { value, .. } => value.as_float_array().map(<[f32]>::len),
            _ => None,
        })
        .collect();
    assert_eq!(lens, vec![64, 16]);
}
