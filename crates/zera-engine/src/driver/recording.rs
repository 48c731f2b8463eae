//! Test driver that records every handle creation, release, and frame command.

use std::cell::RefCell;
use std::rc::Rc;

use super::{BufferKind, Driver, MeshBinding, ProgramOptions};
use crate::geometry::{DrawCall, VertexLayout};
use crate::paint::Color;
use crate::shader::{self, CompiledShader, ShaderError, ShaderSource, ShaderStage};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandleKind {
    Shader,
    Program,
    Buffer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Created { kind: HandleKind, id: u32, label: String },
    Released { kind: HandleKind, id: u32, label: String },
    Cleared(Color),
    Drew { program: u32, vertices: u32, indices: Option<u32>, call: DrawCall },
}

#[derive(Debug, Default)]
struct Ledger {
    next_id: u32,
    events: Vec<Event>,
}

type SharedLedger = Rc<RefCell<Ledger>>;

/// Records its own release into the ledger when dropped.
#[derive(Debug)]
pub struct Probe {
    kind: HandleKind,
    id: u32,
    label: String,
    ledger: SharedLedger,
}

impl Probe {
    fn new(ledger: &SharedLedger, kind: HandleKind, label: &str) -> Self {
        let mut l = ledger.borrow_mut();
        let id = l.next_id;
        l.next_id += 1;
        l.events.push(Event::Created { kind, id, label: label.to_string() });
        Self {
            kind,
            id,
            label: label.to_string(),
            ledger: Rc::clone(ledger),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.ledger.borrow_mut().events.push(Event::Released {
            kind: self.kind,
            id: self.id,
            label: std::mem::take(&mut self.label),
        });
    }
}

#[derive(Debug)]
pub struct RecordingShader {
    pub probe: Probe,
    compiled: CompiledShader,
}

#[derive(Debug)]
pub struct RecordingBuffer {
    pub probe: Probe,
    pub kind: BufferKind,
    pub size: u64,
}

/// Driver double backed by the real shader front end.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    ledger: SharedLedger,
    fail_compile: Option<ShaderStage>,
    fail_link: bool,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes compilation of `stage` fail.
    pub fn failing_compile(mut self, stage: ShaderStage) -> Self {
        self.fail_compile = Some(stage);
        self
    }

    /// Makes every link fail.
    pub fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.ledger.borrow().events.clone()
    }

    pub fn created(&self) -> Vec<(HandleKind, u32, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Created { kind, id, label } => Some((kind, id, label)),
                _ => None,
            })
            .collect()
    }

    pub fn released(&self) -> Vec<(HandleKind, u32, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Released { kind, id, label } => Some((kind, id, label)),
                _ => None,
            })
            .collect()
    }

    pub fn live_handles(&self) -> usize {
        self.created().len() - self.released().len()
    }
}

impl Driver for RecordingDriver {
    type Shader = RecordingShader;
    type Program = Probe;
    type Buffer = RecordingBuffer;
    type Target = ();

    fn compile_shader(&self, source: &ShaderSource) -> Result<Self::Shader, ShaderError> {
        if self.fail_compile == Some(source.stage) {
            return Err(ShaderError::compile(source.stage, source.label, "forced failure"));
        }
        let compiled = shader::compile(source)?;
        Ok(RecordingShader {
            probe: Probe::new(&self.ledger, HandleKind::Shader, source.label),
            compiled,
        })
    }

    fn link_program(
        &self,
        label: &str,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
        layout: &VertexLayout,
        _options: ProgramOptions,
    ) -> Result<Self::Program, ShaderError> {
        if self.fail_link {
            return Err(ShaderError::link(label, "forced failure"));
        }
        shader::link(&vertex.compiled, &fragment.compiled, layout)?;
        Ok(Probe::new(&self.ledger, HandleKind::Program, label))
    }

    fn create_buffer(&self, label: &str, kind: BufferKind, contents: &[u8]) -> Self::Buffer {
        RecordingBuffer {
            probe: Probe::new(&self.ledger, HandleKind::Buffer, label),
            kind,
            size: contents.len() as u64,
        }
    }

    fn buffer_size(&self, buffer: &Self::Buffer) -> u64 {
        buffer.size
    }

    fn clear(&self, _target: &mut Self::Target, color: Color) {
        self.ledger.borrow_mut().events.push(Event::Cleared(color));
    }

    fn draw(&self, _target: &mut Self::Target, program: &Self::Program, mesh: MeshBinding<'_, Self>) {
        self.ledger.borrow_mut().events.push(Event::Drew {
            program: program.id(),
            vertices: mesh.vertices.probe.id(),
            indices: mesh.indices.map(|b| b.probe.id()),
            call: mesh.call,
        });
    }
}
