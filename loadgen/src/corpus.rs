use anyhow::Result;

const DEFAULT_QUESTIONS: &[&str] = &[
    "¿Qué cursos de informática avanzada ofrece Datapath?",
    "¿Cómo puedo registrarme en un curso de Datapath?",
    "¿Cuál es la duración del curso de Ingeniería de Datos?",
    "¿Dónde encuentro el temario del curso de Arquitectura de Datos?",
    "¿Qué requisitos necesito para inscribirme en Análisis de Datos?",
    "¿El curso de DevOps Engineer incluye prácticas en la nube?",
    "¿Qué nivel de conocimientos previos necesito para AI Engineer?",
    "¿Cuál es el costo de los cursos en Datapath?",
    "¿Existen promociones o descuentos en la matrícula?",
    "¿Cómo puedo realizar el pago de un curso?",
    "¿Puedo solicitar una factura al inscribirme?",
    "¿Cuáles son las modalidades disponibles (online o presencial)?",
    "¿Los cursos tienen certificación oficial?",
    "¿Dónde puedo revisar las opiniones de otros estudiantes?",
    "¿Cuál es el próximo inicio de clases en Datapath?",
    "¿Puedo llevar más de un curso a la vez?",
    "¿Datapath ofrece cursos para principiantes?",
    "¿Qué herramientas de software se utilizan en el curso de Ingeniería de Datos?",
    "¿Cómo obtengo asesoría para elegir el curso adecuado?",
    "¿Hay clases grabadas en caso de no poder asistir en vivo?",
    "¿Cuál es la diferencia entre Ingeniería de Datos y Arquitectura de Datos?",
    "¿Qué oportunidades laborales puedo tener al terminar un curso?",
    "¿Datapath entrega material de estudio digital?",
    "¿Cómo puedo contactar a un asesor académico de Datapath?",
    "¿Puedo recibir información detallada en mi correo electrónico?",
];

/// Immutable set of questions a simulated user can ask. Guaranteed non-empty
/// by construction.
#[derive(Debug, Clone)]
pub struct QuestionCorpus {
    questions: Vec<String>,
}

impl QuestionCorpus {
    pub fn new(questions: Vec<String>) -> Result<Self> {
        if questions.is_empty() {
            return Err(anyhow::anyhow!("question corpus must not be empty"));
        }
        Ok(Self { questions })
    }

    /// The question set of the Datapath course chatbot.
    pub fn default_questions() -> Self {
        Self {
            questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
