//! Built-in lexicon tables.
//!
//! Transcribed from the production parts-catalog term lists. Each table maps
//! a Hebrew (or Latin-alphanumeric) source term to its canonical English
//! label. Terms must be unique within an axis; where the historical lists
//! carried the same term under two owners, a single owner was kept.

/// Part category terms: (term, category).
pub const CATEGORY_TERMS: &[(&str, &str)] = &[
    ("פ.אויר", "Air Filter"),
    ("פ.שמן", "Oil Filter"),
    ("פ.דלק", "Fuel Filter"),
    ("פ.סולר", "Diesel Filter"),
    ("פ.מזגן", "A/C Filter"),
    ("פ.גיר", "Transmission Filter"),
    ("רדיאטור", "Radiator"),
    ("מ.מים", "Water Pump"),
    ("מאוורר", "Fan"),
    ("דסקיות", "Brake Discs"),
    ("צלחות", "Brake Rotors"),
    ("רפידות", "Brake Pads"),
    ("נעליים", "Brake Shoes"),
    ("ח.בלם", "Brake Sensor"),
    ("בולם", "Shock Absorber"),
    ("משולש", "Control Arm"),
    ("ת.משולש", "Control Arm Bushing"),
    ("ת.בולם", "Shock Mount"),
    ("ג.מייצב", "Stabilizer Bar"),
    ("מ.מייצב", "Stabilizer Link"),
    ("סט טיימינג", "Timing Belt Kit"),
    ("סט מצמד", "Clutch Kit"),
    ("סט רצועות", "Belt Kit"),
    ("ציריה", "CV Axle"),
    ("טרמוסטט", "Thermostat"),
    ("מיכל עיבוי", "Expansion Tank"),
    ("אטם ראש", "Head Gasket"),
    ("אטם מכסה", "Cover Gasket"),
    ("רצועת", "Belt"),
    ("רצועה", "Belt"),
    ("צינור", "Hose"),
    ("פלגים", "Spark Plugs"),
    ("פלנץ", "Flange"),
    ("מותח", "Tensioner"),
    ("נשם", "Breather"),
    ("יוניט", "Sensor Unit"),
    ("חיישן", "Sensor"),
    ("ח.קראנק", "Crankshaft Sensor"),
    ("מחזיר שמן", "Oil Seal"),
    ("מחבר", "Connector"),
    ("ז.הגה", "Steering Arm"),
    ("קצה הגה", "Tie Rod End"),
    ("זרוע", "Arm"),
    ("קולר", "Cooler"),
    ("מסרק הגה", "Steering Rack"),
    ("מיסב", "Bearing"),
    ("נאבה", "Hub"),
    ("פעמון", "CV Joint Boot"),
    ("ת.מנוע", "Engine Mount"),
    ("ת.גיר", "Transmission Mount"),
    ("כוהל", "Throttle Body"),
    ("מכסה", "Cap"),
    ("פקק", "Plug"),
    ("בית", "Housing"),
    ("קרטר", "Oil Pan"),
    ("דרם", "Drum"),
    ("שיפטר", "Shifter"),
    ("סליל", "Coil"),
    ("תושבת", "Bracket"),
    ("פולי", "Pulley"),
    ("אטם", "Gasket"),
    ("גלגלת", "Wheel"),
    ("כבל", "Cable"),
    ("ממיר", "Converter"),
    ("מזלג", "Fork"),
    ("ידית", "Handle"),
    ("מייסב", "Bearing"),
];

/// Default category when nothing matched.
pub const DEFAULT_CATEGORY: &str = "Other Parts";

/// Brand terms: (term, brand). Model names that uniquely imply a brand are
/// listed here as well, so a lone "אוקטביה" still yields Skoda.
pub const BRAND_TERMS: &[(&str, &str)] = &[
    ("מזדה", "Mazda"),
    ("BT-50", "Mazda"),
    ("BT50", "Mazda"),
    ("B2500", "Mazda"),
    ("לנטיס", "Mazda"),
    ("למטיס", "Mazda"),
    ("626", "Mazda"),
    ("אוקטביה", "Skoda"),
    ("סקודה", "Skoda"),
    ("פביה", "Skoda"),
    ("סופרב", "Skoda"),
    ("רומסטר", "Skoda"),
    ("קודיאק", "Skoda"),
    ("רפיד", "Skoda"),
    ("יטי", "Skoda"),
    ("קארוק", "Skoda"),
    ("יונדאי", "Hyundai"),
    ("I10", "Hyundai"),
    ("I20", "Hyundai"),
    ("I25", "Hyundai"),
    ("I30", "Hyundai"),
    ("I35", "Hyundai"),
    ("I800", "Hyundai"),
    ("IX35", "Hyundai"),
    ("איוניק", "Hyundai"),
    ("טוסון", "Hyundai"),
    ("סנטה פה", "Hyundai"),
    ("אקסנט", "Hyundai"),
    ("גטס", "Hyundai"),
    ("אלנטרה", "Hyundai"),
    ("סונטה", "Hyundai"),
    ("H350", "Hyundai"),
    ("וולסטר", "Hyundai"),
    ("סטאריה", "Hyundai"),
    ("קיה", "Kia"),
    ("ספורטאג", "Kia"),
    ("סיד", "Kia"),
    ("ריו", "Kia"),
    ("פיקנטו", "Kia"),
    ("קרניבל", "Kia"),
    ("סורנטו", "Kia"),
    ("נירו", "Kia"),
    ("סטוניק", "Kia"),
    ("טויוטה", "Toyota"),
    ("קורולה", "Toyota"),
    ("יאריס", "Toyota"),
    ("ראב 4", "Toyota"),
    ("לנדקרוזר", "Toyota"),
    ("קאמרי", "Toyota"),
    ("היילקס", "Toyota"),
    ("אוונסיס", "Toyota"),
    ("ויגו", "Toyota"),
    ("CHR", "Toyota"),
    ("ורסו", "Toyota"),
    ("הייס", "Toyota"),
    ("פריוס", "Toyota"),
    ("אוריס", "Toyota"),
    ("קינג", "Toyota"),
    ("פולו", "Volkswagen"),
    ("גולף", "Volkswagen"),
    ("טיגואן", "Volkswagen"),
    ("פסאט", "Volkswagen"),
    ("קאדי", "Volkswagen"),
    ("טווארג", "Volkswagen"),
    ("ג'טה", "Volkswagen"),
    ("גטה", "Volkswagen"),
    ("T5", "Volkswagen"),
    ("T6", "Volkswagen"),
    ("אמארוק", "Volkswagen"),
    ("TGE", "Volkswagen"),
    ("מרצדס", "Mercedes"),
    ("ויטו", "Mercedes"),
    ("ויאנו", "Mercedes"),
    ("ספרינטר", "Mercedes"),
    ("CLA", "Mercedes"),
    ("GLA", "Mercedes"),
    ("GLE", "Mercedes"),
    ("קלאס", "Mercedes"),
    ("ECLASS", "Mercedes"),
    ("ב.מ.וו", "BMW"),
    ("סדרה 1", "BMW"),
    ("סדרה 2", "BMW"),
    ("סדרה 3", "BMW"),
    ("סדרה 5", "BMW"),
    ("סדרה 7", "BMW"),
    ("X1", "BMW"),
    ("X3", "BMW"),
    ("X5", "BMW"),
    ("X6", "BMW"),
    ("פיגו", "Peugeot"),
    ("107", "Peugeot"),
    ("207", "Peugeot"),
    ("208", "Peugeot"),
    ("301", "Peugeot"),
    ("307", "Peugeot"),
    ("308", "Peugeot"),
    ("3008", "Peugeot"),
    ("5008", "Peugeot"),
    ("508", "Peugeot"),
    ("סיטרואן", "Citroen"),
    ("ברלינגו", "Citroen"),
    ("C1", "Citroen"),
    ("C3", "Citroen"),
    ("C4", "Citroen"),
    ("C5", "Citroen"),
    ("פיקסו", "Citroen"),
    ("גמפי", "Citroen"),
    ("רנו", "Renault"),
    ("קליאו", "Renault"),
    ("מגאן", "Renault"),
    ("פלואנס", "Renault"),
    ("קנגו", "Renault"),
    ("גרנד קופה", "Renault"),
    ("קפצור", "Renault"),
    ("טראפיק", "Renault"),
    ("פורד", "Ford"),
    ("פוקוס", "Ford"),
    ("פיאסטה", "Ford"),
    ("מונדיאו", "Ford"),
    ("טרנזיט", "Ford"),
    ("אדג", "Ford"),
    ("סיאט", "Seat"),
    ("איביזה", "Seat"),
    ("לאון", "Seat"),
    ("אטקה", "Seat"),
    ("ארונה", "Seat"),
    ("קופרה", "Seat"),
    ("פורמנטור", "Seat"),
    ("מיצובישי", "Mitsubishi"),
    ("לנסר", "Mitsubishi"),
    ("אאוטלנדר", "Mitsubishi"),
    ("פגירו", "Mitsubishi"),
    ("טרייטון", "Mitsubishi"),
    ("אווטלנדר", "Mitsubishi"),
    ("גרנדיס", "Mitsubishi"),
    ("אקליפס", "Mitsubishi"),
    ("ס.לנסר", "Mitsubishi"),
    ("מגנום", "Mitsubishi"),
    ("סוזוקי", "Suzuki"),
    ("ויטרה", "Suzuki"),
    ("ליאנה", "Suzuki"),
    ("סוויפט", "Suzuki"),
    ("בלינו", "Suzuki"),
    ("איגניס", "Suzuki"),
    ("SX4", "Suzuki"),
    ("ספלאש", "Suzuki"),
    ("קרוסאובר", "Suzuki"),
    ("ג.ויטרה", "Suzuki"),
    ("בלנו", "Suzuki"),
    ("באלנו", "Suzuki"),
    ("גימיני", "Suzuki"),
    ("הונדה", "Honda"),
    ("סיויק", "Honda"),
    ("אקורד", "Honda"),
    ("CRV", "Honda"),
    ("FRV", "Honda"),
    ("HRV", "Honda"),
    ("ניסאן", "Nissan"),
    ("קשקאי", "Nissan"),
    ("גוק", "Nissan"),
    ("אקסטרייל", "Nissan"),
    ("מיקרה", "Nissan"),
    ("טידה", "Nissan"),
    ("סנטרה", "Nissan"),
    ("נבארה", "Nissan"),
    ("NV200", "Nissan"),
    ("אלמרה", "Nissan"),
    ("נוט", "Nissan"),
    ("NV300", "Nissan"),
    ("מורנו", "Nissan"),
    ("שברולט", "Chevrolet"),
    ("קרוז", "Chevrolet"),
    ("ספארק", "Chevrolet"),
    ("מליבו", "Chevrolet"),
    ("אוואו", "Chevrolet"),
    ("סוניק", "Chevrolet"),
    ("קפטיבה", "Chevrolet"),
    ("טראוורס", "Chevrolet"),
    ("טרייל בלייזר", "Chevrolet"),
    ("סילברדו", "Chevrolet"),
    ("אקווינוקס", "Chevrolet"),
    ("אפלנדר", "Chevrolet"),
    ("לה קרוס", "Chevrolet"),
    ("אימפלה", "Chevrolet"),
    ("דייהטסו", "Daihatsu"),
    ("סיריון", "Daihatsu"),
    ("טריוס", "Daihatsu"),
    ("אודי", "Audi"),
    ("A3", "Audi"),
    ("A4", "Audi"),
    ("A5", "Audi"),
    ("A6", "Audi"),
    ("A7", "Audi"),
    ("A8", "Audi"),
    ("Q2", "Audi"),
    ("Q3", "Audi"),
    ("Q5", "Audi"),
    ("Q7", "Audi"),
    ("Q8", "Audi"),
    ("RS", "Audi"),
    ("RS3", "Audi"),
    ("RS7", "Audi"),
    ("S3", "Audi"),
    ("פיאט", "Fiat"),
    ("פונטו", "Fiat"),
    ("דובלו", "Fiat"),
    ("פנדה", "Fiat"),
    ("500", "Fiat"),
    ("טיפו", "Fiat"),
    ("דוקטו", "Fiat"),
    ("פ.פונטו", "Fiat"),
    ("ג.פונטו", "Fiat"),
    ("בוקסר", "Fiat"),
    ("בראבו", "Fiat"),
    ("קובו", "Fiat"),
    ("אופל", "Opel"),
    ("אסטרה", "Opel"),
    ("קורסה", "Opel"),
    ("אינסנגניה", "Opel"),
    ("מוקה", "Opel"),
    ("אינסגניה", "Opel"),
    ("סובארו", "Subaru"),
    ("B3", "Subaru"),
    ("B4", "Subaru"),
    ("XV", "Subaru"),
    ("פורסטר", "Subaru"),
    ("אמפרזה", "Subaru"),
    ("אמפריזה", "Subaru"),
    ("לגאסי", "Subaru"),
    ("איסוזו", "Isuzu"),
    ("דימקס", "Isuzu"),
    ("טרופר", "Isuzu"),
    ("טרנו", "Isuzu"),
    ("וינר", "Isuzu"),
    ("וולוו", "Volvo"),
    ("S40", "Volvo"),
    ("S60", "Volvo"),
    ("S70", "Volvo"),
    ("S80", "Volvo"),
    ("XC60", "Volvo"),
    ("XC40", "Volvo"),
    ("ג'יפ", "Jeep"),
    ("גרנד צירוקי", "Jeep"),
    ("רינגלר", "Jeep"),
    ("צירוקי", "Jeep"),
    ("דודג", "Dodge"),
    ("ראם", "Dodge"),
    ("MG", "MG"),
    ("MG350", "MG"),
    ("ZS", "MG"),
    ("קדילק", "Cadillac"),
    ("קאדילק", "Cadillac"),
    ("XT5", "Cadillac"),
    ("צ'רי", "Chery"),
    ("CHERY", "Chery"),
    ("צירי", "Chery"),
    ("GMC", "GMC"),
    ("אלפא", "Alfa Romeo"),
    ("מיטו", "Alfa Romeo"),
    ("סטלביו", "Alfa Romeo"),
    ("איווקו", "Iveco"),
    ("דאו", "Daewoo"),
    ("לקסוס", "Lexus"),
    ("פורשה", "Porsche"),
    ("פורש", "Porsche"),
    ("סאנגיונג", "Ssangyong"),
    ("סאניונג", "Ssangyong"),
    ("האנטר", "Ssangyong"),
    ("הנטר", "Ssangyong"),
    ("BYD", "BYD"),
    ("טסלה", "Tesla"),
    ("יגואר", "Jaguar"),
    ("לנד רובר", "Land Rover"),
    ("ריינגר", "Land Rover"),
    ("מיני", "Mini"),
    ("מיניקופר", "Mini"),
    ("ג'ילי", "Geely"),
    ("גילי", "Geely"),
    ("גיאומטרי", "Geely"),
    ("גאז", "GAZ"),
    ("דאציה", "Dacia"),
    ("דאסטר", "Dacia"),
    ("לאדה", "Lada"),
];

/// Sentinel brand when no brand term matched.
pub const DEFAULT_BRAND: &str = "Other";

/// Model terms: (term, model, brand).
pub const MODEL_TERMS: &[(&str, &str, &str)] = &[
    ("מזדה 2", "2", "Mazda"),
    ("מזדה 3", "3", "Mazda"),
    ("מזדה 5", "5", "Mazda"),
    ("מזדה 6", "6", "Mazda"),
    ("CX5", "CX-5", "Mazda"),
    ("CX30", "CX-30", "Mazda"),
    ("CX-30", "CX-30", "Mazda"),
    ("BT-50", "BT-50", "Mazda"),
    ("BT50", "BT-50", "Mazda"),
    ("B2500", "B2500", "Mazda"),
    ("לנטיס", "Lantis", "Mazda"),
    ("למטיס", "Lantis", "Mazda"),
    ("626", "626", "Mazda"),
    ("אוקטביה", "Octavia", "Skoda"),
    ("פביה", "Fabia", "Skoda"),
    ("סופרב", "Superb", "Skoda"),
    ("רומסטר", "Roomster", "Skoda"),
    ("קודיאק", "Kodiaq", "Skoda"),
    ("רפיד", "Rapid", "Skoda"),
    ("יטי", "Yeti", "Skoda"),
    ("קארוק", "Karoq", "Skoda"),
    ("I10", "i10", "Hyundai"),
    ("I20", "i20", "Hyundai"),
    ("I25", "i25", "Hyundai"),
    ("I30", "i30", "Hyundai"),
    ("I35", "i35", "Hyundai"),
    ("I800", "i800", "Hyundai"),
    ("IX35", "ix35", "Hyundai"),
    ("טוסון", "Tucson", "Hyundai"),
    ("סנטה פה", "Santa Fe", "Hyundai"),
    ("אקסנט", "Accent", "Hyundai"),
    ("גטס", "Getz", "Hyundai"),
    ("איוניק", "Ioniq", "Hyundai"),
    ("אלנטרה", "Elantra", "Hyundai"),
    ("סונטה", "Sonata", "Hyundai"),
    ("קונה", "Kona", "Hyundai"),
    ("H350", "H350", "Hyundai"),
    ("וולסטר", "Veloster", "Hyundai"),
    ("סטאריה", "Staria", "Hyundai"),
    ("קורולה", "Corolla", "Toyota"),
    ("יאריס", "Yaris", "Toyota"),
    ("ראב 4", "RAV4", "Toyota"),
    ("לנדקרוזר", "Land Cruiser", "Toyota"),
    ("קאמרי", "Camry", "Toyota"),
    ("היילקס", "Hilux", "Toyota"),
    ("ויגו", "Vigo", "Toyota"),
    ("אוונסיס", "Avensis", "Toyota"),
    ("CHR", "CHR", "Toyota"),
    ("ורסו", "Verso", "Toyota"),
    ("אוריס", "Auris", "Toyota"),
    ("פריוס", "Prius", "Toyota"),
    ("הייס", "Hiace", "Toyota"),
    ("קינג", "King", "Toyota"),
    ("קשקאי", "Qashqai", "Nissan"),
    ("גוק", "Juke", "Nissan"),
    ("אקסטרייל", "X-Trail", "Nissan"),
    ("מיקרה", "Micra", "Nissan"),
    ("טידה", "Tiida", "Nissan"),
    ("סנטרה", "Sentra", "Nissan"),
    ("נבארה", "Navara", "Nissan"),
    ("NV200", "NV200", "Nissan"),
    ("אלמרה", "Almera", "Nissan"),
    ("נוט", "Note", "Nissan"),
    ("NV300", "NV300", "Nissan"),
    ("מורנו", "Murano", "Nissan"),
    ("ספורטאג", "Sportage", "Kia"),
    ("סיד", "Ceed", "Kia"),
    ("ריו", "Rio", "Kia"),
    ("פיקנטו", "Picanto", "Kia"),
    ("קרניבל", "Carnival", "Kia"),
    ("סורנטו", "Sorento", "Kia"),
    ("נירו", "Niro", "Kia"),
    ("סטוניק", "Stonic", "Kia"),
    ("פורטה", "Forte", "Kia"),
    ("אופטימה", "Optima", "Kia"),
    ("פולו", "Polo", "Volkswagen"),
    ("גולף", "Golf", "Volkswagen"),
    ("טיגואן", "Tiguan", "Volkswagen"),
    ("פסאט", "Passat", "Volkswagen"),
    ("קאדי", "Caddy", "Volkswagen"),
    ("טווארג", "Touareg", "Volkswagen"),
    ("ג'טה", "Jetta", "Volkswagen"),
    ("גטה", "Jetta", "Volkswagen"),
    ("T5", "Transporter", "Volkswagen"),
    ("T6", "Transporter", "Volkswagen"),
    ("אמארוק", "Amarok", "Volkswagen"),
    ("TGE", "TGE", "Volkswagen"),
    ("לנסר", "Lancer", "Mitsubishi"),
    ("ס.לנסר", "Lancer", "Mitsubishi"),
    ("אאוטלנדר", "Outlander", "Mitsubishi"),
    ("אווטלנדר", "Outlander", "Mitsubishi"),
    ("פגירו", "Pajero", "Mitsubishi"),
    ("פג'רו", "Pajero", "Mitsubishi"),
    ("טרייטון", "Triton", "Mitsubishi"),
    ("גרנדיס", "Grandis", "Mitsubishi"),
    ("אקליפס", "Eclipse", "Mitsubishi"),
    ("מגנום", "Magnum", "Mitsubishi"),
    ("ויטרה", "Vitara", "Suzuki"),
    ("בלינו", "Baleno", "Suzuki"),
    ("בלנו", "Baleno", "Suzuki"),
    ("באלנו", "Baleno", "Suzuki"),
    ("סוויפט", "Swift", "Suzuki"),
    ("איגניס", "Ignis", "Suzuki"),
    ("SX4", "SX4", "Suzuki"),
    ("קרוסאובר", "SX4", "Suzuki"),
    ("ספלאש", "Splash", "Suzuki"),
    ("ג.ויטרה", "Grand Vitara", "Suzuki"),
    ("גימיני", "Jimny", "Suzuki"),
    ("פוקוס", "Focus", "Ford"),
    ("פיאסטה", "Fiesta", "Ford"),
    ("מונדיאו", "Mondeo", "Ford"),
    ("טרנזיט", "Transit", "Ford"),
    ("אדג", "Edge", "Ford"),
    ("דימקס", "D-Max", "Isuzu"),
    ("טרופר", "Trooper", "Isuzu"),
    ("אמפרזה", "Impreza", "Subaru"),
    ("אמפריזה", "Impreza", "Subaru"),
    ("לגאסי", "Legacy", "Subaru"),
    ("פורסטר", "Forester", "Subaru"),
    ("XV", "XV", "Subaru"),
    ("B3", "B3", "Subaru"),
    ("B4", "B4", "Subaru"),
];

/// Placeholder model when a brand was found without any model term.
pub const GENERIC_MODEL: &str = "Generic Model";

/// Front/Rear/Upper/Lower markers: (term, position).
pub const POSITION_TERMS: &[(&str, &str)] = &[
    ("קדמי", "Front"),
    ("אחורי", "Rear"),
    ("עליון", "Upper"),
    ("תחתון", "Lower"),
];

/// Left/Right markers: (term, side).
pub const SIDE_TERMS: &[(&str, &str)] = &[("ימין", "Right"), ("שמאל", "Left")];

/// Known engine codes: (code, description). Whole-word matched.
pub const ENGINE_CODES: &[(&str, &str)] = &[
    ("CBZ", "Volkswagen/Skoda 1.2 TSI"),
    ("CJZ", "Volkswagen/Skoda 1.2 TSI"),
    ("BSE", "Volkswagen/Skoda 1.6"),
    ("BTS", "Volkswagen/Skoda 1.6"),
    ("CAX", "Volkswagen/Skoda 1.4 TSI"),
    ("CAV", "Volkswagen/Skoda 1.4 TSI"),
    ("BMY", "Volkswagen/Skoda 1.4 TSI"),
    ("CJJ", "Volkswagen/Skoda 1.4"),
    ("CDA", "Volkswagen/Skoda 1.8 TSI"),
    ("CJS", "Volkswagen/Skoda 1.8 TSI"),
    ("CNC", "Volkswagen/Skoda 2.0 TSI"),
    ("CJX", "Volkswagen/Skoda 2.0 TSI"),
    ("BLR", "Volkswagen/Skoda 2.0 FSI"),
    ("BLX", "Volkswagen/Skoda 2.0 FSI"),
    ("BLY", "Volkswagen/Skoda 2.0 FSI"),
    ("AXW", "Volkswagen/Skoda 2.0 FSI"),
    ("CRM", "Volkswagen/Skoda Diesel"),
    ("TDI", "Volkswagen/Skoda Diesel"),
    ("CJE", "Volkswagen/Skoda"),
    ("CAY", "Volkswagen/Skoda"),
    ("CGG", "Volkswagen/Skoda"),
    ("CRC", "Volkswagen/Skoda"),
];

/// Drive-type markers: (token, description).
pub const DRIVE_TERMS: &[(&str, &str)] = &[
    ("4x4", "Four-wheel drive"),
    ("4x2", "Two-wheel drive"),
];

/// Model terms that collide with engine-code shapes. A mention of one of
/// these is only accepted as a model with supporting brand context, and is
/// treated as an engine designation when displacement-adjacent.
pub const AMBIGUOUS_MODEL_CODES: &[&str] = &["XV", "B3", "B4", "CDA", "CJS", "CAX"];

/// Terms that establish Subaru context for the ambiguous XV/B3/B4 trio.
pub const SUBARU_CONTEXT_TERMS: &[&str] =
    &["סובארו", "אימפרזה", "אמפרזה", "אמפריזה", "פורסטר"];
