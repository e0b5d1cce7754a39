//! Records a fresh installation starts with.

use std::collections::BTreeSet;
use std::error::Error;

use crate::model::appeal::{Appeal, AppealId, AppealType};
use crate::model::module::{Module, ModuleCode};
use crate::model::student::{Credits, MatricId, Name, PrevMods, Student};
use crate::model::tag::Tag;
use crate::model::Mams;

fn student(
    name: &str,
    credits: &str,
    prev_mods: &str,
    matric_id: &str,
    tags: &[&str],
    current: &[&str],
) -> Result<Student, Box<dyn Error>> {
    let tags = tags
        .iter()
        .map(|t| Tag::new(*t))
        .collect::<Result<BTreeSet<_>, _>>()?;
    let current = current
        .iter()
        .map(|c| ModuleCode::new(*c))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Student::new(
        Name::new(name)?,
        Credits::new(credits)?,
        PrevMods::new(prev_mods)?,
        MatricId::new(matric_id)?,
        tags,
    )
    .with_current_modules(current))
}

fn module(code: &str, title: &str, time_slots: &[u16]) -> Result<Module, Box<dyn Error>> {
    Ok(Module::new(ModuleCode::new(code)?, title, time_slots.to_vec()))
}

pub fn sample_mams() -> Result<Mams, Box<dyn Error>> {
    let students = vec![
        student(
            "Alex Yeoh",
            "20",
            "CS1010, CS1231",
            "A0156273X",
            &["friends"],
            &["CS2103T", "CS2101"],
        )?,
        student(
            "Bernice Yu",
            "24",
            "CS1010, MA1521",
            "A0189713H",
            &["colleagues", "friends"],
            &["CS2103T", "CS2030"],
        )?,
        student(
            "Charlotte Oliveiro",
            "16",
            "CS1010",
            "A0169183U",
            &["neighbours"],
            &["CS2040"],
        )?,
        student("David Li", "20", "", "A0176348J", &[], &["CS1231"])?,
    ];

    let appeals = vec![
        Appeal::new(
            AppealId::new("C000001")?,
            AppealType::AddModule,
            MatricId::new("A0169183U")?,
            "2019/2020",
            16,
            "Below minimum workload for this semester",
        )
        .with_module_to_add(ModuleCode::new("CS2101")?),
        Appeal::new(
            AppealId::new("C000002")?,
            AppealType::DropModule,
            MatricId::new("A0189713H")?,
            "2019/2020",
            24,
            "Medical leave for part of the semester",
        )
        .with_module_to_drop(ModuleCode::new("CS2030")?),
        Appeal::new(
            AppealId::new("C000003")?,
            AppealType::ModuleSwap,
            MatricId::new("A0156273X")?,
            "2019/2020",
            20,
            "Tutorial slots clash with part-time work",
        )
        .with_swap(ModuleCode::new("CS2101")?, ModuleCode::new("CS2040")?),
        Appeal::new(
            AppealId::new("C000004")?,
            AppealType::IncreaseWorkload,
            MatricId::new("A0176348J")?,
            "2019/2020",
            20,
            "Wants to graduate a semester early",
        ),
    ];

    let modules = vec![
        module("CS1231", "Discrete Structures", &[3, 12, 27])?,
        module("CS2030", "Programming Methodology II", &[8, 20, 33])?,
        module("CS2040", "Data Structures and Algorithms", &[2, 14, 27])?,
        module("CS2101", "Effective Communication for Computing Professionals", &[5, 17])?,
        module("CS2103T", "Software Engineering", &[5, 22, 38])?,
    ];

    Ok(Mams::from_parts(students, appeals, modules)?)
}
