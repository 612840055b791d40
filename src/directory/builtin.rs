//! Built-in fallback dataset.
//!
//! Used when no dataset file is supplied, and as a known-good fixture in
//! tests. Two records deliberately lack coordinates: listing must include
//! them, ranking must not.

use super::types::Ngo;

struct BuiltinNgo {
    id: u32,
    name: &'static str,
    category: &'static str,
    email: Option<&'static str>,
    phone: Option<&'static str>,
    address: Option<&'static str>,
    city: Option<&'static str>,
    lat: Option<f64>,
    lon: Option<f64>,
}

const BUILTIN_NGOS: &[BuiltinNgo] = &[
    BuiltinNgo {
        id: 1,
        name: "Fundación Luz y Vida",
        category: "salud",
        email: Some("contacto@luzyvida.org.mx"),
        phone: Some("+52 55 5512 3344"),
        address: Some("Av. Insurgentes Sur 1457"),
        city: Some("Ciudad de México"),
        lat: Some(19.4326), lon: Some(-99.1332),
    },
    BuiltinNgo {
        id: 2,
        name: "Techo Digno A.C.",
        category: "vivienda",
        email: Some("hola@techodigno.mx"),
        phone: None,
        address: Some("Calle Morelos 210"),
        city: Some("Guadalajara"),
        lat: Some(20.6668), lon: Some(-103.3918),
    },
    BuiltinNgo {
        id: 3,
        name: "Banco de Alimentos del Norte",
        category: "alimentación",
        email: Some("donativos@bandelnorte.org"),
        phone: Some("+52 81 8340 1122"),
        address: None,
        city: Some("Monterrey"),
        lat: Some(25.6866), lon: Some(-100.3161),
    },
    BuiltinNgo {
        id: 4,
        name: "Educación sin Fronteras MX",
        category: "educación",
        email: None,
        phone: Some("+52 222 248 9901"),
        address: Some("Blvd. 5 de Mayo 3105"),
        city: Some("Puebla"),
        lat: Some(19.0414), lon: Some(-98.2063),
    },
    BuiltinNgo {
        id: 5,
        name: "Verde Urbano",
        category: "medio ambiente",
        email: Some("info@verdeurbano.mx"),
        phone: None,
        address: Some("Av. Revolución 880"),
        city: Some("Ciudad de México"),
        lat: Some(19.3574), lon: Some(-99.1860),
    },
    BuiltinNgo {
        id: 6,
        name: "Casa Hogar Esperanza",
        category: "infancia",
        email: Some("casa@hogaresperanza.org.mx"),
        phone: Some("+52 664 621 7788"),
        address: None,
        city: Some("Tijuana"),
        lat: Some(32.5149), lon: Some(-117.0382),
    },
    BuiltinNgo {
        id: 7,
        name: "Red de Apoyo Migrante",
        category: "derechos humanos",
        email: Some("red@apoyomigrante.org"),
        phone: None,
        address: None,
        city: None,
        lat: None, lon: None,
    },
    BuiltinNgo {
        id: 8,
        name: "Rescate Animal Bajío",
        category: "bienestar animal",
        email: None,
        phone: Some("+52 477 713 5620"),
        address: Some("Calzada de los Héroes 404"),
        city: Some("León"),
        lat: Some(21.1619), lon: Some(-101.6921),
    },
    BuiltinNgo {
        id: 9,
        name: "Mujeres Adelante A.C.",
        category: "equidad de género",
        email: Some("contacto@mujeresadelante.mx"),
        phone: Some("+52 999 920 4433"),
        address: Some("Calle 60 núm. 299"),
        city: Some("Mérida"),
        lat: Some(20.9674), lon: Some(-89.5926),
    },
    BuiltinNgo {
        id: 10,
        name: "Agua Limpia Ya",
        category: "medio ambiente",
        email: Some("agua@limpiaya.org"),
        phone: None,
        address: None,
        city: Some("Oaxaca"),
        lat: Some(17.0732), lon: Some(-96.7266),
    },
    BuiltinNgo {
        id: 11,
        name: "Voluntarios del Golfo",
        category: "protección civil",
        email: None,
        phone: Some("+52 229 931 0287"),
        address: Some("Malecón Ávila Camacho 15"),
        city: Some("Veracruz"),
        lat: Some(19.1738), lon: Some(-96.1342),
    },
    BuiltinNgo {
        id: 12,
        name: "Alfabetiza Chiapas",
        category: "educación",
        email: Some("hola@alfabetizachiapas.org"),
        phone: None,
        address: None,
        city: Some("Tuxtla Gutiérrez"),
        lat: None, lon: None,
    },
];

/// Materialize the built-in records.
pub fn builtin_ngos() -> Vec<Ngo> {
    BUILTIN_NGOS
        .iter()
        .map(|b| Ngo {
            id: b.id,
            name: b.name.to_string(),
            category: b.category.to_string(),
            email: b.email.map(str::to_string),
            phone: b.phone.map(str::to_string),
            address: b.address.map(str::to_string),
            city: b.city.map(str::to_string),
            lat: b.lat,
            lon: b.lon,
        })
        .collect()
}
