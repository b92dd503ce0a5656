use crate::domain::{Project, Worker};

/// Built-in roster written on first run. Ids are fixed so a reseeded kiosk
/// produces the same identifiers as the historical deployments.
pub fn default_workers() -> Vec<Worker> {
    [
        ("w1", "Juan García"),
        ("w2", "Pedro Martínez"),
        ("w3", "María Rodríguez"),
        ("w4", "Antonio López"),
        ("w5", "Luis Sánchez"),
        ("w6", "Francisco Fernández"),
        ("w7", "Manuel González"),
        ("w8", "José Pérez"),
    ]
    .into_iter()
    .map(|(id, name)| Worker {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Built-in project list written on first run. All start active.
pub fn default_projects() -> Vec<Project> {
    [
        ("p-limpieza", "LIMPIEZA Y MANTENIMIENTO TALLER"),
        ("p1", "CAMIÓN SCANIA R450 - GRÚA PALFINGER PK23"),
        ("p2", "VOLVO FH16 - GRÚA FASSI F545"),
        ("p3", "MERCEDES ACTROS - GRÚA HIAB X-HIPRO"),
        ("p4", "IVECO STRALIS - MONTAJE CAJA FIJA"),
        ("p5", "RENAULT T - MANTENIMIENTO PREVENTIVO"),
        ("p6", "MAN TGX - REPARACIÓN SISTEMA HIDRÁULICO"),
    ]
    .into_iter()
    .map(|(id, name)| Project {
        id: id.to_string(),
        name: name.to_string(),
        active: true,
    })
    .collect()
}
