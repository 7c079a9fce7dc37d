//! The triangle renderer.
//!
//! This module defines [`TriangleDemo`], which owns one shader program, one
//! vertex buffer, and one vertex array, and draws a single triangle each
//! frame. The GLSL sources are embedded at compile time and the vertex data
//! is a fixed constant, so the whole component is a straight sequence of
//! driver calls behind the four [`EventHandler`] hooks.

use std::sync::Arc;

use glam::Vec4;

use crate::abs::{Driver, EventHandler};

const VERTEX_SHADER_SOURCE: &str = include_str!("shaders/triangle/vert.glsl");
const FRAGMENT_SHADER_SOURCE: &str = include_str!("shaders/triangle/frag.glsl");

/// Triangle corners in normalized device coordinates, (x, y, z, w) per vertex.
#[rustfmt::skip]
const POINTS: [f32; 12] = [
    -0.5, 0.0, 0.0, 1.0,
     0.5, 0.0, 0.0, 1.0,
     0.0, 0.5, 0.0, 1.0,
];

const CLEAR_COLOR: Vec4 = Vec4::new(0.0, 0.0, 1.0, 0.0);
const TRIANGLE_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

/// GPU-side state of the demo: both shader stages, the linked program, the
/// vertex buffer, and the vertex array describing it.
///
/// Dropping the struct unbinds everything and deletes each handle exactly
/// once, so the resources are released on every exit path.
struct GpuResources<D: Driver> {
    driver: Arc<D>,
    vertex_shader: D::Shader,
    fragment_shader: D::Shader,
    program: D::Program,
    vbo: D::Buffer,
    vao: D::VertexArray,
}

impl<D: Driver> Drop for GpuResources<D> {
    fn drop(&mut self) {
        let gl = &self.driver;
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        gl.bind_vertex_array(None);
        gl.use_program(None);
        gl.delete_buffer(self.vbo);
        gl.delete_vertex_array(self.vao);
        gl.delete_program(self.program);
        gl.delete_shader(self.fragment_shader);
        gl.delete_shader(self.vertex_shader);
    }
}

/// Renders a single white triangle on a blue background.
pub struct TriangleDemo<D: Driver> {
    driver: Arc<D>,
    resources: Option<GpuResources<D>>,
}

impl<D: Driver> TriangleDemo<D> {
    /// Creates the demo. No GPU resources are touched until [`EventHandler::on_load`].
    pub fn new(driver: Arc<D>) -> Self {
        Self {
            driver,
            resources: None,
        }
    }
}

impl<D: Driver> EventHandler for TriangleDemo<D> {
    fn on_load(&mut self) {
        let gl = &self.driver;

        // Compile both shader stages. Compile status is deliberately not
        // queried; a failed compile leaves the program invalid and the
        // frame stays blank.
        let vertex_shader = gl.create_shader(glow::VERTEX_SHADER);
        gl.shader_source(vertex_shader, VERTEX_SHADER_SOURCE);
        gl.compile_shader(vertex_shader);

        let fragment_shader = gl.create_shader(glow::FRAGMENT_SHADER);
        gl.shader_source(fragment_shader, FRAGMENT_SHADER_SOURCE);
        gl.compile_shader(fragment_shader);

        let program = gl.create_program();
        gl.attach_shader(program, vertex_shader);
        gl.attach_shader(program, fragment_shader);
        gl.link_program(program);

        // Upload the vertex data into a fresh buffer.
        let vbo = gl.create_buffer();
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        let bytes = unsafe {
            std::slice::from_raw_parts(POINTS.as_ptr() as *const u8, std::mem::size_of_val(&POINTS))
        };
        gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);

        let position_location = gl.get_attrib_location(program, "position");

        // Describe the buffer layout: one vec4 per vertex, tightly packed.
        let vao = gl.create_vertex_array();
        gl.bind_vertex_array(Some(vao));
        if let Some(location) = position_location {
            gl.vertex_attrib_pointer_f32(location, 4, glow::FLOAT, false, 0, 0);
            gl.enable_vertex_attrib_array(location);
        }

        gl.clear_color(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, CLEAR_COLOR.w);

        self.resources = Some(GpuResources {
            driver: Arc::clone(&self.driver),
            vertex_shader,
            fragment_shader,
            program,
            vbo,
            vao,
        });
    }

    fn on_resize(&mut self, width: i32, height: i32) {
        self.driver.viewport(0, 0, width, height);
    }

    fn on_render_frame(&mut self) {
        let gl = &self.driver;
        if let Some(resources) = &self.resources {
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(resources.vbo));
            gl.bind_vertex_array(Some(resources.vao));

            // Looked up by name every frame, as the location is not cached.
            let color_location = gl.get_uniform_location(resources.program, "inColor");
            gl.use_program(Some(resources.program));
            gl.uniform_4_f32(
                color_location.as_ref(),
                TRIANGLE_COLOR.x,
                TRIANGLE_COLOR.y,
                TRIANGLE_COLOR.z,
                TRIANGLE_COLOR.w,
            );

            gl.draw_arrays(glow::TRIANGLES, 0, 3);
            gl.swap_buffers();
        }
    }

    fn on_unload(&mut self) {
        // Dropping the resources performs the unbind and delete sequence.
        self.resources = None;
    }
}
