use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::geometry::VertexLayout;

use super::error::ShaderError;
use super::source::{ShaderSource, ShaderStage};

/// The program renders into one color attachment.
const COLOR_TARGET_LOCATION: u32 = 0;

/// A parsed and validated shader stage.
///
/// Holds the IR module plus the stage interface (`@location` inputs and
/// outputs of the entry point) used by `link`.
#[derive(Debug, Clone)]
pub struct CompiledShader {
    source: ShaderSource,
    module: naga::Module,
    inputs: Vec<u32>,
    outputs: Vec<u32>,
}

impl CompiledShader {
    pub fn source(&self) -> &ShaderSource {
        &self.source
    }

    pub fn stage(&self) -> ShaderStage {
        self.source.stage
    }

    pub fn entry_point(&self) -> &'static str {
        self.source.entry_point
    }

    pub fn module(&self) -> &naga::Module {
        &self.module
    }

    /// `@location` inputs of the entry point, ascending.
    pub fn inputs(&self) -> &[u32] {
        &self.inputs
    }

    /// `@location` outputs of the entry point, ascending.
    pub fn outputs(&self) -> &[u32] {
        &self.outputs
    }
}

/// Compiles one stage: parse, validate, and locate the entry point.
pub fn compile(source: &ShaderSource) -> Result<CompiledShader, ShaderError> {
    let fail = |log: String| ShaderError::compile(source.stage, source.label, log);

    let module = naga::front::wgsl::parse_str(source.code)
        .map_err(|e| fail(e.emit_to_string(source.code)))?;

    // No optional capabilities: a module accepted here is accepted by any adapter.
    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| fail(e.emit_to_string(source.code)))?;

    let entry = module
        .entry_points
        .iter()
        .find(|ep| ep.name == source.entry_point)
        .ok_or_else(|| fail(format!("entry point `{}` not found", source.entry_point)))?;

    if entry.stage != source.stage.naga() {
        return Err(fail(format!(
            "entry point `{}` is a {:?} entry point, expected {}",
            source.entry_point, entry.stage, source.stage
        )));
    }

    let mut inputs = Vec::new();
    for arg in &entry.function.arguments {
        collect_locations(&module, arg.binding.as_ref(), arg.ty, &mut inputs);
    }

    let mut outputs = Vec::new();
    if let Some(result) = &entry.function.result {
        collect_locations(&module, result.binding.as_ref(), result.ty, &mut outputs);
    }

    inputs.sort_unstable();
    outputs.sort_unstable();

    log::debug!(
        "compiled {} shader `{}` (inputs {:?}, outputs {:?})",
        source.stage,
        source.label,
        inputs,
        outputs
    );

    Ok(CompiledShader {
        source: *source,
        module,
        inputs,
        outputs,
    })
}

/// Checks that a vertex and fragment stage form a complete program for `layout`.
///
/// - the stages are a vertex stage followed by a fragment stage
/// - the vertex layout is well formed and feeds every vertex input
/// - every fragment input is written by the vertex stage
/// - the fragment stage writes exactly the single color target, `@location(0)`
pub fn link(
    vertex: &CompiledShader,
    fragment: &CompiledShader,
    layout: &VertexLayout,
) -> Result<(), ShaderError> {
    let label = format!("{} + {}", vertex.source.label, fragment.source.label);
    let mut problems = Vec::new();

    if vertex.stage() != ShaderStage::Vertex {
        problems.push(format!("`{}` is not a vertex stage", vertex.source.label));
    }
    if fragment.stage() != ShaderStage::Fragment {
        problems.push(format!("`{}` is not a fragment stage", fragment.source.label));
    }

    if let Err(e) = layout.validate() {
        problems.push(format!("vertex layout: {e}"));
    }

    for location in vertex.inputs() {
        if !layout.locations().any(|l| l == *location) {
            problems.push(format!("vertex input @location({location}) has no vertex attribute"));
        }
    }

    for location in fragment.inputs() {
        if !vertex.outputs().contains(location) {
            problems.push(format!(
                "fragment input @location({location}) is not written by the vertex stage"
            ));
        }
    }

    if fragment.outputs() != [COLOR_TARGET_LOCATION].as_slice() {
        problems.push(format!(
            "fragment outputs {:?} do not match the single color target @location({COLOR_TARGET_LOCATION})",
            fragment.outputs()
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ShaderError::link(label, problems.join("\n")))
    }
}

fn collect_locations(
    module: &naga::Module,
    binding: Option<&naga::Binding>,
    ty: naga::Handle<naga::Type>,
    out: &mut Vec<u32>,
) {
    match binding {
        Some(naga::Binding::Location { location, .. }) => out.push(*location),
        Some(_) => {}
        None => {
            if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_locations(module, member.binding.as_ref(), member.ty, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::VertexAttribute;
    use crate::shader::{POSITION_VERTEX, SOLID_FRAGMENT};

    const TINTED_VERTEX: ShaderSource = ShaderSource {
        label: "tinted vs",
        stage: ShaderStage::Vertex,
        entry_point: "vs_main",
        code: r#"
struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tint: vec3<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>, @location(1) tint: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(position, 1.0);
    out.tint = tint;
    return out;
}
"#,
    };

    const TINTED_FRAGMENT: ShaderSource = ShaderSource {
        label: "tinted fs",
        stage: ShaderStage::Fragment,
        entry_point: "fs_main",
        code: r#"
@fragment
fn fs_main(@location(0) tint: vec3<f32>, @location(2) extra: f32) -> @location(0) vec4<f32> {
    return vec4<f32>(tint * extra, 1.0);
}
"#,
    };

    #[test]
    fn embedded_vertex_stage_compiles() {
        let vs = compile(&POSITION_VERTEX).expect("embedded vertex shader must compile");
        assert_eq!(vs.stage(), ShaderStage::Vertex);
        assert_eq!(vs.inputs(), &[0]);
        assert!(vs.outputs().is_empty());
    }

    #[test]
    fn embedded_fragment_stage_compiles() {
        let fs = compile(&SOLID_FRAGMENT).expect("embedded fragment shader must compile");
        assert_eq!(fs.stage(), ShaderStage::Fragment);
        assert!(fs.inputs().is_empty());
        assert_eq!(fs.outputs(), &[0]);
    }

    #[test]
    fn embedded_program_links() {
        let vs = compile(&POSITION_VERTEX).unwrap();
        let fs = compile(&SOLID_FRAGMENT).unwrap();
        assert!(link(&vs, &fs, &VertexLayout::positions3()).is_ok());
    }

    #[test]
    fn syntax_error_reports_compile_failure() {
        let broken = ShaderSource {
            code: "@vertex fn vs_main( -> @builtin(position) vec4<f32> {",
            ..POSITION_VERTEX
        };
        let err = compile(&broken).unwrap_err();
        match &err {
            ShaderError::Compile { stage, .. } => assert_eq!(*stage, ShaderStage::Vertex),
            other => panic!("expected compile error, got {other:?}"),
        }
        assert!(!err.log().as_str().is_empty());
    }

    #[test]
    fn missing_entry_point_is_a_compile_failure() {
        let renamed = ShaderSource {
            entry_point: "main",
            ..SOLID_FRAGMENT
        };
        let err = compile(&renamed).unwrap_err();
        assert!(err.log().as_str().contains("`main`"));
    }

    #[test]
    fn stage_mismatch_is_a_compile_failure() {
        let wrong = ShaderSource {
            stage: ShaderStage::Fragment,
            ..POSITION_VERTEX
        };
        assert!(matches!(compile(&wrong), Err(ShaderError::Compile { .. })));
    }

    #[test]
    fn swapped_stages_fail_to_link() {
        let vs = compile(&POSITION_VERTEX).unwrap();
        let fs = compile(&SOLID_FRAGMENT).unwrap();
        let err = link(&fs, &vs, &VertexLayout::positions3()).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
    }

    #[test]
    fn unfed_vertex_input_fails_to_link() {
        let vs = compile(&TINTED_VERTEX).unwrap();
        let fs = compile(&SOLID_FRAGMENT).unwrap();
        let err = link(&vs, &fs, &VertexLayout::positions3()).unwrap_err();
        assert!(err.log().as_str().contains("@location(1)"));
    }

    #[test]
    fn unwritten_fragment_input_fails_to_link() {
        let vs = compile(&TINTED_VERTEX).unwrap();
        let fs = compile(&TINTED_FRAGMENT).unwrap();
        assert_eq!(vs.outputs(), &[0]);
        assert_eq!(fs.inputs(), &[0, 2]);

        let layout = VertexLayout {
            stride: 24,
            attributes: vec![
                VertexAttribute { location: 0, components: 3, offset: 0 },
                VertexAttribute { location: 1, components: 3, offset: 12 },
            ],
        };
        let err = link(&vs, &fs, &layout).unwrap_err();
        let log = err.log().as_str();
        assert!(log.contains("@location(2)"));
        assert!(!log.contains("@location(0)"));
    }

    #[test]
    fn fragment_output_off_the_color_target_fails_to_link() {
        let misplaced = ShaderSource {
            code: r#"
@fragment
fn fs_main() -> @location(1) vec4<f32> {
    return vec4<f32>(1.0, 0.5, 0.2, 1.0);
}
"#,
            ..SOLID_FRAGMENT
        };
        let vs = compile(&POSITION_VERTEX).unwrap();
        let fs = compile(&misplaced).unwrap();
        assert_eq!(fs.outputs(), &[1]);

        let err = link(&vs, &fs, &VertexLayout::positions3()).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.log().as_str().contains("color target"));
    }
}
