/// WGSL shader for the instanced cubes.
///
/// The vertex stage applies the per-instance matrix to each cube vertex; the
/// fragment stage outputs the instance color unlit.
pub const INSTANCED_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) matrix_0: vec4<f32>,
    @location(3) matrix_1: vec4<f32>,
    @location(4) matrix_2: vec4<f32>,
    @location(5) matrix_3: vec4<f32>,
    @location(6) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let instance_matrix = mat4x4<f32>(
        instance.matrix_0,
        instance.matrix_1,
        instance.matrix_2,
        instance.matrix_3,
    );

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * instance_matrix * vec4<f32>(vertex.position, 1.0);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_declares_instance_attributes() {
        assert!(INSTANCED_SHADER.contains("@location(6) color: vec3<f32>"));
        assert!(INSTANCED_SHADER.contains("fn vs_main"));
        assert!(INSTANCED_SHADER.contains("fn fs_main"));
    }
}
