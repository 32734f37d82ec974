//! Built-in unit definitions, organized by category
//!
//! Units are derived from the base units with the unit algebra, so every
//! definition is checked as it is built.

use std::f64::consts::PI;
use metrum_core::{BaseDimension, BaseUnit, Result, Unit, UnitError};
use crate::UnitsDatabase;

/// Regular English plural of a unit name
pub(crate) fn plural(name: &str) -> String {
    if ["s", "x", "z", "ch", "sh"].iter().any(|end| name.ends_with(end)) {
        return format!("{name}es");
    }
    if let Some(stem) = name.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{name}s")
}

impl UnitsDatabase {
    pub(crate) fn register_builtin_units(&mut self) -> Result<()> {
        self.register_base_units();
        self.register_dimensionless_units()?;
        self.register_length_units()?;
        self.register_mass_units()?;
        self.register_time_units()?;
        self.register_temperature_units()?;
        self.register_angle_units()?;
        self.register_si_derived_units()?;
        self.register_area_units()?;
        self.register_volume_units()?;
        self.register_velocity_units()?;
        self.register_acceleration_units()?;
        self.register_force_units()?;
        self.register_energy_units()?;
        self.register_power_units()?;
        self.register_pressure_units()?;
        self.register_frequency_units()?;
        self.register_cgs_units()?;
        self.register_radiation_units()?;
        self.register_geophysical_units()?;
        tracing::debug!(entries = self.len(), "registered built-in units");
        Ok(())
    }

    /// An already registered unit, by exact symbol or name
    fn get(&self, id: &str) -> Result<Unit> {
        self.get_symbol(id)
            .or_else(|| self.get_name(id))
            .cloned()
            .ok_or_else(|| UnitError::no_such_unit(id))
    }

    /// Register under a symbol; returns the unit as it now displays
    fn symbol(&mut self, symbol: &str, unit: Unit) -> Unit {
        let unit = unit.with_identifier(symbol);
        self.put_symbol(symbol, unit.clone());
        unit
    }

    /// Register names together with their regular plurals
    fn plural_names(&mut self, names: &[&str], unit: &Unit) {
        for name in names {
            self.put_name(name, unit.clone());
            self.put_name(&plural(name), unit.clone());
        }
    }

    /// Register names exactly as given
    fn exact_names(&mut self, names: &[&str], unit: &Unit) {
        for name in names {
            self.put_name(name, unit.clone());
        }
    }

    fn register_base_units(&mut self) {
        for slot in BaseDimension::ALL {
            let unit = self.symbol(slot.unit_symbol(), BaseUnit::reference(slot).into());
            if slot == BaseDimension::Bespoke {
                self.exact_names(&[slot.unit_name()], &unit);
            } else {
                self.plural_names(&[slot.unit_name()], &unit);
            }
        }
    }

    fn register_dimensionless_units(&mut self) -> Result<()> {
        let one = Unit::dimensionless();

        let percent = self.symbol("%", one.scale(0.01)?);
        self.exact_names(&["percent"], &percent);
        self.symbol("ppm", one.scale(1e-6)?);
        self.symbol("ppb", one.scale(1e-9)?);

        self.plural_names(&["pair"], &one.scale(2.0)?);
        self.plural_names(&["dozen"], &one.scale(12.0)?);
        self.plural_names(&["score"], &one.scale(20.0)?);
        self.plural_names(&["gross"], &one.scale(144.0)?);
        self.plural_names(&["hundred"], &one.scale(100.0)?);
        self.plural_names(&["thousand"], &one.scale(1e3)?);
        self.plural_names(&["million"], &one.scale(1e6)?);
        self.exact_names(&["pi"], &one.scale(PI)?);

        // Information
        self.plural_names(&["bit"], &one);
        self.plural_names(&["byte"], &one.scale(8.0)?);
        Ok(())
    }

    fn register_length_units(&mut self) -> Result<()> {
        let m = self.get("m")?;
        self.plural_names(&["metre"], &m);

        self.plural_names(&["micron"], &m.scale(1e-6)?);
        let angstrom = self.symbol("Å", m.scale(1e-10)?);
        self.plural_names(&["angstrom"], &angstrom);

        // Imperial/US
        let inch = self.symbol("in", m.scale(0.0254)?);
        self.plural_names(&["inch"], &inch);
        let ft = self.symbol("ft", m.scale(0.3048)?);
        self.exact_names(&["foot", "feet"], &ft);
        let yd = self.symbol("yd", m.scale(0.9144)?);
        self.plural_names(&["yard"], &yd);
        let mi = self.symbol("mi", m.scale(1609.344)?);
        self.plural_names(&["mile"], &mi);
        let nmi = self.symbol("nmi", m.scale(1852.0)?);
        self.plural_names(&["nmile"], &nmi);
        self.plural_names(&["fathom"], &ft.scale(6.0)?);
        self.plural_names(&["chain"], &ft.scale(66.0)?);
        self.plural_names(&["furlong"], &ft.scale(660.0)?);
        self.plural_names(&["mil"], &inch.scale(1e-3)?);
        self.plural_names(&["fermi"], &m.scale(1e-15)?);

        // Astronomical
        let au = self.symbol("au", m.scale(149597870700.0)?);
        self.plural_names(&["astronomical_unit"], &au);
        let ly = self.symbol("ly", m.scale(9460730472580800.0)?);
        self.plural_names(&["lightyear", "light_year"], &ly);
        let pc = self.symbol("pc", m.scale(3.0856775814913673e16)?);
        self.plural_names(&["parsec"], &pc);
        Ok(())
    }

    fn register_mass_units(&mut self) -> Result<()> {
        let kg = self.get("kg")?;

        let g = self.symbol("g", kg.scale(1e-3)?);
        self.plural_names(&["gram", "gramme"], &g);
        let t = self.symbol("t", kg.scale(1e3)?);
        self.plural_names(&["tonne", "metric_ton"], &t);
        self.plural_names(&["carat"], &g.scale(0.2)?);
        self.exact_names(&["amu", "dalton"], &kg.scale(1.66053906660e-27)?);

        // Avoirdupois
        let lb = self.symbol("lb", kg.scale(0.45359237)?);
        self.plural_names(&["pound"], &lb);
        let oz = self.symbol("oz", lb.scale(1.0 / 16.0)?);
        self.plural_names(&["ounce"], &oz);
        let grain = self.symbol("gr", lb.scale(1.0 / 7000.0)?);
        self.plural_names(&["grain"], &grain);
        self.plural_names(&["ton", "short_ton"], &lb.scale(2000.0)?);
        let dram = self.symbol("dr", oz.scale(1.0 / 16.0)?);
        self.plural_names(&["dram"], &dram);
        self.plural_names(&["slug"], &kg.scale(14.59390)?);

        // Troy and apothecaries'
        self.plural_names(&["pennyweight"], &grain.scale(24.0)?);
        self.plural_names(&["scruple"], &grain.scale(20.0)?);
        self.plural_names(&["apdram"], &grain.scale(60.0)?);
        Ok(())
    }

    fn register_time_units(&mut self) -> Result<()> {
        let s = self.get("s")?;
        self.exact_names(&["sec", "secs"], &s);

        let min = self.symbol("min", s.scale(60.0)?);
        self.plural_names(&["minute"], &min);
        let h = self.symbol("h", min.scale(60.0)?);
        self.plural_names(&["hour", "hr"], &h);
        let d = self.symbol("d", h.scale(24.0)?);
        self.plural_names(&["day"], &d);
        self.plural_names(&["week"], &d.scale(7.0)?);
        self.plural_names(&["fortnight"], &d.scale(14.0)?);

        // Tropical year
        let year = s.scale(3.15569259747e7)?;
        self.plural_names(&["year", "yr"], &year);
        self.plural_names(&["month"], &year.scale(1.0 / 12.0)?);
        self.plural_names(&["century"], &year.scale(100.0)?);
        self.plural_names(&["shake"], &s.scale(1e-8)?);
        self.plural_names(&["jiffy"], &s.scale(1e-2)?);
        Ok(())
    }

    fn register_temperature_units(&mut self) -> Result<()> {
        let k = self.get("K")?;
        self.exact_names(&["degK", "degreeK", "degreesK"], &k);

        // K = C + 273.15
        let celsius = self.symbol("°C", k.shift(273.15)?);
        self.exact_names(
            &[
                "celsius",
                "centigrade",
                "degC",
                "degreeC",
                "degreesC",
                "degree_C",
                "degrees_C",
                "degree_Celsius",
                "degrees_Celsius",
            ],
            &celsius,
        );

        // K = R * 5/9
        let rankine = self.symbol("°R", k.scale(1.0 / 1.8)?);
        self.exact_names(&["rankine", "degR", "degreeR", "degreesR"], &rankine);

        // K = (F + 459.67) * 5/9
        let fahrenheit = self.symbol("°F", rankine.shift(459.67)?);
        self.exact_names(&["fahrenheit", "degF", "degreeF", "degreesF"], &fahrenheit);
        Ok(())
    }

    fn register_angle_units(&mut self) -> Result<()> {
        let rad = self.get("rad")?;

        let degree = self.symbol("°", rad.scale(PI / 180.0)?);
        self.plural_names(&["degree", "deg", "arcdeg"], &degree);
        let arcmin = degree.scale(1.0 / 60.0)?;
        self.plural_names(&["arcminute", "arcmin"], &arcmin);
        self.plural_names(&["arcsecond", "arcsec"], &arcmin.scale(1.0 / 60.0)?);
        self.plural_names(&["circle", "turn", "revolution"], &rad.scale(2.0 * PI)?);
        self.plural_names(&["grade", "gon"], &degree.scale(0.9)?);

        // Geographic coordinates
        self.exact_names(
            &[
                "degree_north",
                "degrees_north",
                "degreeN",
                "degreesN",
                "degree_east",
                "degrees_east",
                "degreeE",
                "degreesE",
            ],
            &degree,
        );
        let reversed = degree.scale(-1.0)?;
        self.exact_names(
            &[
                "degree_south",
                "degrees_south",
                "degreesS",
                "degree_west",
                "degrees_west",
                "degreeW",
                "degreesW",
            ],
            &reversed,
        );
        Ok(())
    }

    fn register_si_derived_units(&mut self) -> Result<()> {
        let m = self.get("m")?;
        let kg = self.get("kg")?;
        let s = self.get("s")?;
        let a = self.get("A")?;
        let mol = self.get("mol")?;
        let cd = self.get("cd")?;
        let sr = self.get("sr")?;
        let m2 = m.pow(2)?;

        let hz = self.symbol("Hz", s.invert()?);
        self.exact_names(&["hertz"], &hz);
        let n = self.symbol("N", kg.multiply(&m)?.divide(&s.pow(2)?)?);
        self.plural_names(&["newton"], &n);
        let pa = self.symbol("Pa", n.divide(&m2)?);
        self.plural_names(&["pascal"], &pa);
        let j = self.symbol("J", n.multiply(&m)?);
        self.plural_names(&["joule"], &j);
        let w = self.symbol("W", j.divide(&s)?);
        self.plural_names(&["watt"], &w);

        // Electrical
        let c = self.symbol("C", a.multiply(&s)?);
        self.plural_names(&["coulomb"], &c);
        let v = self.symbol("V", w.divide(&a)?);
        self.plural_names(&["volt"], &v);
        let f = self.symbol("F", c.divide(&v)?);
        self.plural_names(&["farad"], &f);
        let ohm = self.symbol("Ohm", v.divide(&a)?);
        self.symbol("Ω", ohm.clone());
        self.plural_names(&["ohm"], &ohm);
        let siemens = self.symbol("S", a.divide(&v)?);
        self.exact_names(&["siemens", "mho"], &siemens);
        let wb = self.symbol("Wb", v.multiply(&s)?);
        self.plural_names(&["weber"], &wb);
        let tesla = self.symbol("T", wb.divide(&m2)?);
        self.plural_names(&["tesla"], &tesla);
        let henry = self.symbol("H", wb.divide(&a)?);
        self.plural_names(&["henry"], &henry);
        self.plural_names(&["gamma"], &tesla.scale(1e-9)?);

        // Photometric
        let lm = self.symbol("lm", cd.multiply(&sr)?);
        self.plural_names(&["lumen"], &lm);
        let lx = self.symbol("lx", lm.divide(&m2)?);
        self.exact_names(&["lux"], &lx);

        // Radiation and catalysis
        let bq = self.symbol("Bq", s.invert()?);
        self.plural_names(&["becquerel"], &bq);
        let gy = self.symbol("Gy", j.divide(&kg)?);
        self.plural_names(&["gray"], &gy);
        let sv = self.symbol("Sv", j.divide(&kg)?);
        self.plural_names(&["sievert"], &sv);
        let kat = self.symbol("kat", mol.divide(&s)?);
        self.plural_names(&["katal"], &kat);
        Ok(())
    }

    fn register_area_units(&mut self) -> Result<()> {
        let m2 = self.get("m")?.pow(2)?;

        self.plural_names(&["are"], &m2.scale(100.0)?);
        let ha = self.symbol("ha", m2.scale(1e4)?);
        self.plural_names(&["hectare"], &ha);
        self.plural_names(&["acre"], &m2.scale(4046.8564224)?);
        self.plural_names(&["barn"], &m2.scale(1e-28)?);
        Ok(())
    }

    fn register_volume_units(&mut self) -> Result<()> {
        let m3 = self.get("m")?.pow(3)?;

        let liter = self.symbol("L", m3.scale(1e-3)?);
        self.symbol("l", liter.clone());
        self.plural_names(&["liter", "litre"], &liter);

        // US liquid
        let gal = self.symbol("gal", m3.scale(3.785411784e-3)?);
        self.plural_names(&["gallon"], &gal);
        let qt = self.symbol("qt", gal.scale(0.25)?);
        self.plural_names(&["quart"], &qt);
        let pt = self.symbol("pt", gal.scale(0.125)?);
        self.plural_names(&["pint"], &pt);
        let bbl = self.symbol("bbl", gal.scale(42.0)?);
        self.plural_names(&["barrel"], &bbl);
        let cup = gal.scale(1.0 / 16.0)?;
        self.plural_names(&["cup"], &cup);
        self.plural_names(&["gill"], &gal.scale(1.0 / 32.0)?);
        let floz = self.symbol("floz", gal.scale(1.0 / 128.0)?);
        self.plural_names(&["fluid_ounce"], &floz);
        let fldr = self.symbol("fldr", floz.scale(1.0 / 8.0)?);
        self.plural_names(&["fluid_dram"], &fldr);
        let tbsp = self.symbol("tbsp", floz.scale(0.5)?);
        self.symbol("Tbsp", tbsp.clone());
        self.plural_names(&["tablespoon"], &tbsp);
        self.exact_names(&["Tbl"], &tbsp);
        let tsp = self.symbol("tsp", tbsp.scale(1.0 / 3.0)?);
        self.plural_names(&["teaspoon"], &tsp);

        // US dry
        let bu = self.symbol("bu", m3.scale(3.523907e-2)?);
        self.plural_names(&["bushel"], &bu);
        let pk = self.symbol("pk", bu.scale(0.25)?);
        self.plural_names(&["peck"], &pk);

        self.symbol("cc", self.get("m")?.scale(0.01)?.pow(3)?);
        self.plural_names(&["stere"], &m3);
        Ok(())
    }

    fn register_velocity_units(&mut self) -> Result<()> {
        let h = self.get("h")?;

        self.symbol("mph", self.get("mi")?.divide(&h)?);
        let knot = self.symbol("kt", self.get("nmi")?.divide(&h)?);
        self.plural_names(&["knot"], &knot);
        self.symbol("rpm", self.get("circle")?.divide(&self.get("min")?)?);
        Ok(())
    }

    fn register_acceleration_units(&mut self) -> Result<()> {
        let accel = self.get("m")?.divide(&self.get("s")?.pow(2)?)?;

        self.symbol("Gal", accel.scale(0.01)?);
        self.exact_names(&["gravity", "standard_gravity"], &accel.scale(9.80665)?);
        Ok(())
    }

    fn register_force_units(&mut self) -> Result<()> {
        let gravity = self.get("gravity")?;

        let dyne = self.symbol("dyn", self.get("N")?.scale(1e-5)?);
        self.plural_names(&["dyne"], &dyne);
        let lbf = self.symbol("lbf", self.get("lb")?.multiply(&gravity)?);
        self.exact_names(&["pound_force"], &lbf);
        let kgf = self.symbol("kgf", self.get("kg")?.multiply(&gravity)?);
        self.exact_names(&["kilogram_force"], &kgf);
        self.plural_names(&["poundal"], &self.get("N")?.scale(1.382550e-1)?);
        self.plural_names(&["kip"], &lbf.scale(1e3)?);
        Ok(())
    }

    fn register_energy_units(&mut self) -> Result<()> {
        let j = self.get("J")?;

        let ev = self.symbol("eV", j.scale(1.602176634e-19)?);
        self.plural_names(&["electronvolt"], &ev);
        // International table calorie
        let cal = self.symbol("cal", j.scale(4.1868)?);
        self.plural_names(&["calorie"], &cal);
        self.plural_names(&["erg"], &j.scale(1e-7)?);
        let btu = self.symbol("Btu", j.scale(1055.05585262)?);
        self.exact_names(&["btu"], &btu);
        self.symbol("Wh", self.get("W")?.multiply(&self.get("h")?)?);
        // US therm
        let thm = self.symbol("thm", j.scale(1.054804e8)?);
        self.plural_names(&["therm"], &thm);
        Ok(())
    }

    fn register_power_units(&mut self) -> Result<()> {
        // Mechanical horsepower
        let hp = self.symbol("hp", self.get("W")?.scale(745.69987158227022)?);
        self.exact_names(&["horsepower"], &hp);
        let va = self.symbol("VA", self.get("V")?.multiply(&self.get("A")?)?);
        self.plural_names(&["voltampere"], &va);
        Ok(())
    }

    fn register_pressure_units(&mut self) -> Result<()> {
        let pa = self.get("Pa")?;

        let bar = self.symbol("bar", pa.scale(1e5)?);
        self.plural_names(&["bar"], &bar);
        let atm = self.symbol("atm", pa.scale(101325.0)?);
        self.plural_names(&["atmosphere"], &atm);
        let torr = self.symbol("Torr", atm.scale(1.0 / 760.0)?);
        self.plural_names(&["torr"], &torr);
        self.symbol("mmHg", pa.scale(133.322387415)?);
        let inch2 = self.get("in")?.pow(2)?;
        self.symbol("psi", self.get("lbf")?.divide(&inch2)?);
        self.symbol("ksi", self.get("kip")?.divide(&inch2)?);

        // Pressure per unit height of a liquid column: "cm H2O"
        let per_meter = pa.divide(&self.get("m")?)?;
        let water = self.symbol("H2O", per_meter.scale(9806.65)?);
        let mercury = self.symbol("Hg", per_meter.scale(133322.387415)?);
        let cm = self.get("m")?.scale(1e-2)?;
        let inch = self.get("in")?;
        self.symbol("cmH2O", cm.multiply(&water)?);
        self.symbol("cmHg", cm.multiply(&mercury)?);
        self.symbol("inHg", inch.multiply(&mercury)?);
        self.symbol("ftH2O", self.get("ft")?.multiply(&water)?);
        Ok(())
    }

    fn register_frequency_units(&mut self) -> Result<()> {
        let hz = self.get("Hz")?;

        let baud = self.symbol("Bd", hz.clone());
        self.exact_names(&["baud"], &baud);
        self.symbol("bps", hz);
        self.symbol("rps", self.get("circle")?.divide(&self.get("s")?)?);
        Ok(())
    }

    /// Centimetre-gram-second mechanical and electromagnetic units
    fn register_cgs_units(&mut self) -> Result<()> {
        let a = self.get("A")?;

        let p = self.symbol("P", self.get("Pa")?.multiply(&self.get("s")?)?.scale(0.1)?);
        self.plural_names(&["poise"], &p);
        let st = self.symbol("St", self.get("m")?.pow(2)?.divide(&self.get("s")?)?.scale(1e-4)?);
        self.exact_names(&["stokes"], &st);
        self.plural_names(&["barie", "barye"], &self.get("Pa")?.scale(0.1)?);
        self.plural_names(&["kayser"], &self.get("m")?.invert()?.scale(100.0)?);

        let abampere = a.scale(10.0)?;
        self.plural_names(&["abampere", "biot"], &abampere);
        self.plural_names(&["abfarad"], &self.get("F")?.scale(1e9)?);
        self.plural_names(&["abhenry"], &self.get("H")?.scale(1e-9)?);
        self.plural_names(&["abmho"], &self.get("S")?.scale(1e9)?);
        self.plural_names(&["abohm"], &self.get("Ohm")?.scale(1e-9)?);
        self.plural_names(&["abvolt"], &self.get("V")?.scale(1e-8)?);

        self.plural_names(&["statampere"], &a.scale(3.335640e-10)?);
        self.plural_names(&["statcoulomb"], &self.get("C")?.scale(3.335640e-10)?);
        self.plural_names(&["statfarad"], &self.get("F")?.scale(1.112650e-12)?);
        self.plural_names(&["stathenry"], &self.get("H")?.scale(8.987554e11)?);
        self.plural_names(&["statmho"], &self.get("S")?.scale(1.112650e-12)?);
        self.plural_names(&["statohm"], &self.get("Ohm")?.scale(8.987554e11)?);
        self.plural_names(&["statvolt"], &self.get("V")?.scale(2.997925e2)?);

        self.plural_names(&["gauss"], &self.get("T")?.scale(1e-4)?);
        self.plural_names(&["maxwell"], &self.get("Wb")?.scale(1e-8)?);
        let oe = self.symbol("Oe", a.divide(&self.get("m")?)?.scale(7.957747e1)?);
        self.plural_names(&["oersted"], &oe);
        self.plural_names(&["gilbert"], &a.scale(7.957747e-1)?);
        Ok(())
    }

    fn register_radiation_units(&mut self) -> Result<()> {
        let ci = self.symbol("Ci", self.get("Bq")?.scale(3.7e10)?);
        self.plural_names(&["curie"], &ci);
        self.plural_names(&["rem"], &self.get("Sv")?.scale(1e-2)?);
        // Absorbed dose; "rad" is the radian
        let rd = self.symbol("rd", self.get("Gy")?.scale(1e-2)?);
        self.exact_names(&["rads"], &rd);
        let roentgen = self.symbol("R", self.get("C")?.divide(&self.get("kg")?)?.scale(2.58e-4)?);
        self.plural_names(&["roentgen"], &roentgen);
        Ok(())
    }

    /// Atmospheric and oceanographic units
    fn register_geophysical_units(&mut self) -> Result<()> {
        let m = self.get("m")?;
        let s = self.get("s")?;

        // Ozone column
        let du = self.symbol("DU", m.scale(1e-5)?);
        self.plural_names(&["dobson"], &du);

        let gp = self.symbol("gp", self.get("gravity")?);
        self.exact_names(&["geopotential", "dynamic"], &gp);
        self.symbol("gpm", gp.multiply(&m)?);

        // Potential vorticity: 1e-6 K m2 kg-1 s-1
        let pvu = m.pow(2)?.divide(&s)?.multiply(&self.get("K")?)?.divide(&self.get("kg")?)?;
        self.symbol("PVU", pvu.scale(1e-6)?);

        // Ocean volume transport
        self.plural_names(&["sverdrup"], &m.pow(3)?.scale(1e6)?.divide(&s)?);

        // Solar radiation per area, thermochemical calories per cm2
        self.plural_names(&["langley"], &self.get("J")?.divide(&m.pow(2)?)?.scale(4.184e4)?);
        Ok(())
    }
}
