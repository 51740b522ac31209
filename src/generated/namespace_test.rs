// automatically generated shape for the namespace test schema, do not modify
//
// namespace NamespaceA.NamespaceB;
// enum EnumInNestedNS:byte { A, B, C }
// table TableInNestedNS { foo:int; }
// struct StructInNestedNS { a:int; b:int; }
//
// namespace NamespaceA;
// table TableInFirstNS { foo_table:NamespaceB.TableInNestedNS;
//                        foo_enum:NamespaceB.EnumInNestedNS = A;
//                        foo_struct:NamespaceB.StructInNestedNS; }
// table SecondTableInA { refer_to_c:NamespaceC.TableInC; }
//
// namespace NamespaceC;
// table TableInC { refer_to_a1:NamespaceA.TableInFirstNS;
//                  refer_to_a2:NamespaceA.SecondTableInA; }

pub mod namespace_a {
    use crate::config::VerifierOptions;
    use crate::error::{BuildResult, DecodeResult};
    use crate::protocol::{
        verify_root, verify_size_prefixed_root, Builder, Follow, ForwardsUOffset, Offset, Table,
        TableMut, Verifiable, Verifier,
    };

    pub mod namespace_b {
        use crate::config::VerifierOptions;
        use crate::core::scalar::read_i32;
        use crate::error::{BuildResult, DecodeError, DecodeResult};
        use crate::protocol::layout::SIZE_SIZE_PREFIX;
        use crate::protocol::{
            root_of_mut, verify_root, verify_size_prefixed_root, Builder, Follow, ForwardsUOffset,
            Inline, Offset, Struct, Table, TableMut, Verifiable, Verifier,
        };

        #[repr(i8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum EnumInNestedNS {
            #[default]
            A = 0,
            B = 1,
            C = 2,
        }

        impl EnumInNestedNS {
            pub const ENUM_MIN: i8 = 0;
            pub const ENUM_MAX: i8 = 2;
            pub const ENUM_VALUES: [EnumInNestedNS; 3] =
                [EnumInNestedNS::A, EnumInNestedNS::B, EnumInNestedNS::C];

            pub fn from_i8(value: i8) -> Option<Self> {
                match value {
                    0 => Some(Self::A),
                    1 => Some(Self::B),
                    2 => Some(Self::C),
                    _ => None,
                }
            }

            #[inline]
            pub fn to_i8(self) -> i8 {
                self as i8
            }

            pub fn variant_name(self) -> &'static str {
                match self {
                    Self::A => "A",
                    Self::B => "B",
                    Self::C => "C",
                }
            }
        }

        impl TryFrom<i8> for EnumInNestedNS {
            type Error = DecodeError;

            fn try_from(value: i8) -> Result<Self, DecodeError> {
                Self::from_i8(value).ok_or(DecodeError::UnknownEnumValue {
                    type_name: "EnumInNestedNS",
                    value: value as i64,
                })
            }
        }

        impl<'a> Follow<'a> for EnumInNestedNS {
            type Inner = Self;

            #[inline]
            fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<Self> {
                Self::try_from(i8::follow(buf, pos)?)
            }
        }

        impl Inline for EnumInNestedNS {
            const SIZE: usize = 1;
        }

        // Discriminant tidak dicek di sini: buffer dari skema yang lebih baru tetap valid.
        impl Verifiable for EnumInNestedNS {
            #[inline]
            fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
                i8::run_verifier(v, pos)
            }
        }

        pub enum TableInNestedNSOffset {}

        #[derive(Debug, Clone, Copy)]
        pub struct TableInNestedNS<'a> {
            pub _tab: Table<'a>,
        }

        impl<'a> Follow<'a> for TableInNestedNS<'a> {
            type Inner = TableInNestedNS<'a>;

            #[inline]
            fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<Self::Inner> {
                Ok(Self {
                    _tab: Table::new(buf, pos),
                })
            }
        }

        impl<'a> TableInNestedNS<'a> {
            pub const VT_FOO: u16 = 4;

            #[inline]
            pub fn init_from_table(table: Table<'a>) -> Self {
                Self { _tab: table }
            }

            pub fn create(
                fbb: &mut Builder,
                args: &TableInNestedNSArgs,
            ) -> BuildResult<Offset<TableInNestedNSOffset>> {
                let mut builder = TableInNestedNSBuilder::new(fbb)?;
                builder.add_foo(args.foo)?;
                builder.finish()
            }

            #[inline]
            pub fn foo(&self) -> DecodeResult<i32> {
                self._tab.get::<i32>(Self::VT_FOO, 0)
            }
        }

        impl Verifiable for TableInNestedNS<'_> {
            fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
                v.visit_table(pos)?
                    .visit_field::<i32>(Self::VT_FOO, false)?
                    .finish();
                Ok(())
            }
        }

        #[derive(Debug, Clone, Copy, Default)]
        pub struct TableInNestedNSArgs {
            pub foo: i32,
        }

        pub struct TableInNestedNSBuilder<'b> {
            fbb: &'b mut Builder,
        }

        impl<'b> TableInNestedNSBuilder<'b> {
            pub fn new(fbb: &'b mut Builder) -> BuildResult<Self> {
                fbb.start_object(1)?;
                Ok(Self { fbb })
            }

            #[inline]
            pub fn add_foo(&mut self, foo: i32) -> BuildResult<()> {
                self.fbb.add_field_i32(0, foo, 0)
            }

            pub fn finish(self) -> BuildResult<Offset<TableInNestedNSOffset>> {
                self.fbb.end_object()
            }
        }

        #[derive(Debug)]
        pub struct TableInNestedNSMut<'a> {
            pub _tab: TableMut<'a>,
        }

        impl<'a> TableInNestedNSMut<'a> {
            #[inline]
            pub fn init_from_table(table: TableMut<'a>) -> Self {
                Self { _tab: table }
            }

            pub fn reader(&self) -> TableInNestedNS<'_> {
                TableInNestedNS::init_from_table(self._tab.as_table())
            }

            /// `Ok(false)` jika `foo` tidak tersimpan di buffer.
            pub fn mutate_foo(&mut self, foo: i32) -> DecodeResult<bool> {
                self._tab.mutate::<i32>(TableInNestedNS::VT_FOO, foo)
            }
        }

        pub fn root_as_table_in_nested_ns(buf: &[u8]) -> DecodeResult<TableInNestedNS<'_>> {
            root_as_table_in_nested_ns_with_opts(&VerifierOptions::default(), buf)
        }

        pub fn root_as_table_in_nested_ns_with_opts<'a>(
            opts: &VerifierOptions,
            buf: &'a [u8],
        ) -> DecodeResult<TableInNestedNS<'a>> {
            verify_root::<TableInNestedNS>(buf, opts)?;
            root_as_table_in_nested_ns_unverified(buf)
        }

        pub fn root_as_table_in_nested_ns_unverified(buf: &[u8]) -> DecodeResult<TableInNestedNS<'_>> {
            <ForwardsUOffset<TableInNestedNS>>::follow(buf, 0)
        }

        pub fn size_prefixed_root_as_table_in_nested_ns(
            buf: &[u8],
        ) -> DecodeResult<TableInNestedNS<'_>> {
            verify_size_prefixed_root::<TableInNestedNS>(buf, &VerifierOptions::default())?;
            <ForwardsUOffset<TableInNestedNS>>::follow(buf, SIZE_SIZE_PREFIX)
        }

        pub fn root_as_table_in_nested_ns_mut(
            buf: &mut [u8],
        ) -> DecodeResult<TableInNestedNSMut<'_>> {
            verify_root::<TableInNestedNS>(buf, &VerifierOptions::default())?;
            Ok(TableInNestedNSMut::init_from_table(root_of_mut(buf)?))
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct StructInNestedNS {
            a: i32,
            b: i32,
        }

        impl StructInNestedNS {
            pub const A_OFFSET: usize = 0;
            pub const B_OFFSET: usize = 4;

            pub fn new(a: i32, b: i32) -> Self {
                Self { a, b }
            }

            #[inline]
            pub fn a(&self) -> i32 {
                self.a
            }

            #[inline]
            pub fn b(&self) -> i32 {
                self.b
            }
        }

        impl Struct for StructInNestedNS {
            const SIZE: usize = 8;
            const ALIGN: usize = 4;

            fn write_to(&self, dst: &mut [u8]) {
                dst[Self::A_OFFSET..Self::A_OFFSET + 4].copy_from_slice(&self.a.to_le_bytes());
                dst[Self::B_OFFSET..Self::B_OFFSET + 4].copy_from_slice(&self.b.to_le_bytes());
            }
        }

        impl<'a> Follow<'a> for StructInNestedNS {
            type Inner = Self;

            #[inline]
            fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<Self> {
                Ok(Self {
                    a: read_i32(buf, pos + Self::A_OFFSET)?,
                    b: read_i32(buf, pos + Self::B_OFFSET)?,
                })
            }
        }

        impl Inline for StructInNestedNS {
            const SIZE: usize = <Self as Struct>::SIZE;
        }

        impl Verifiable for StructInNestedNS {
            #[inline]
            fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
                v.verify_inline(pos, <Self as Struct>::SIZE, <Self as Struct>::ALIGN)
            }
        }
    }

    use self::namespace_b::{
        EnumInNestedNS, StructInNestedNS, TableInNestedNS, TableInNestedNSMut,
        TableInNestedNSOffset,
    };
    use super::namespace_c::{TableInC, TableInCMut, TableInCOffset};

    pub enum TableInFirstNSOffset {}

    #[derive(Debug, Clone, Copy)]
    pub struct TableInFirstNS<'a> {
        pub _tab: Table<'a>,
    }

    impl<'a> Follow<'a> for TableInFirstNS<'a> {
        type Inner = TableInFirstNS<'a>;

        #[inline]
        fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<Self::Inner> {
            Ok(Self {
                _tab: Table::new(buf, pos),
            })
        }
    }

    impl<'a> TableInFirstNS<'a> {
        pub const VT_FOO_TABLE: u16 = 4;
        pub const VT_FOO_ENUM: u16 = 6;
        pub const VT_FOO_STRUCT: u16 = 8;

        #[inline]
        pub fn init_from_table(table: Table<'a>) -> Self {
            Self { _tab: table }
        }

        pub fn create(
            fbb: &mut Builder,
            args: &TableInFirstNSArgs,
        ) -> BuildResult<Offset<TableInFirstNSOffset>> {
            let mut builder = TableInFirstNSBuilder::new(fbb)?;
            if let Some(x) = args.foo_struct {
                builder.add_foo_struct(&x)?;
            }
            if let Some(x) = args.foo_table {
                builder.add_foo_table(x)?;
            }
            builder.add_foo_enum(args.foo_enum)?;
            builder.finish()
        }

        #[inline]
        pub fn foo_table(&self) -> DecodeResult<Option<TableInNestedNS<'a>>> {
            self._tab
                .get_field::<ForwardsUOffset<TableInNestedNS<'a>>>(Self::VT_FOO_TABLE)
        }

        #[inline]
        pub fn foo_enum(&self) -> DecodeResult<EnumInNestedNS> {
            let raw = self
                ._tab
                .get::<i8>(Self::VT_FOO_ENUM, EnumInNestedNS::A.to_i8())?;
            EnumInNestedNS::try_from(raw)
        }

        #[inline]
        pub fn foo_struct(&self) -> DecodeResult<Option<StructInNestedNS>> {
            self._tab.get_struct::<StructInNestedNS>(Self::VT_FOO_STRUCT)
        }
    }

    impl Verifiable for TableInFirstNS<'_> {
        fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<TableInNestedNS>>(Self::VT_FOO_TABLE, false)?
                .visit_field::<EnumInNestedNS>(Self::VT_FOO_ENUM, false)?
                .visit_field::<StructInNestedNS>(Self::VT_FOO_STRUCT, false)?
                .finish();
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct TableInFirstNSArgs {
        pub foo_table: Option<Offset<TableInNestedNSOffset>>,
        pub foo_enum: EnumInNestedNS,
        pub foo_struct: Option<StructInNestedNS>,
    }

    pub struct TableInFirstNSBuilder<'b> {
        fbb: &'b mut Builder,
    }

    impl<'b> TableInFirstNSBuilder<'b> {
        pub fn new(fbb: &'b mut Builder) -> BuildResult<Self> {
            fbb.start_object(3)?;
            Ok(Self { fbb })
        }

        #[inline]
        pub fn add_foo_table(&mut self, foo_table: Offset<TableInNestedNSOffset>) -> BuildResult<()> {
            self.fbb.add_field_offset(0, foo_table)
        }

        #[inline]
        pub fn add_foo_enum(&mut self, foo_enum: EnumInNestedNS) -> BuildResult<()> {
            self.fbb
                .add_field_i8(1, foo_enum.to_i8(), EnumInNestedNS::A.to_i8())
        }

        #[inline]
        pub fn add_foo_struct(&mut self, foo_struct: &StructInNestedNS) -> BuildResult<()> {
            self.fbb.push_field_struct(2, foo_struct)
        }

        pub fn finish(self) -> BuildResult<Offset<TableInFirstNSOffset>> {
            self.fbb.end_object()
        }
    }

    #[derive(Debug)]
    pub struct TableInFirstNSMut<'a> {
        pub _tab: TableMut<'a>,
    }

    impl<'a> TableInFirstNSMut<'a> {
        #[inline]
        pub fn init_from_table(table: TableMut<'a>) -> Self {
            Self { _tab: table }
        }

        pub fn reader(&self) -> TableInFirstNS<'_> {
            TableInFirstNS::init_from_table(self._tab.as_table())
        }

        /// `Ok(false)` jika `foo_enum` tidak tersimpan (nilai default di-elide saat build).
        pub fn mutate_foo_enum(&mut self, foo_enum: EnumInNestedNS) -> DecodeResult<bool> {
            self._tab
                .mutate::<i8>(TableInFirstNS::VT_FOO_ENUM, foo_enum.to_i8())
        }

        pub fn mutate_foo_struct_a(&mut self, a: i32) -> DecodeResult<bool> {
            self._tab
                .mutate_at::<i32>(TableInFirstNS::VT_FOO_STRUCT, StructInNestedNS::A_OFFSET, a)
        }

        pub fn mutate_foo_struct_b(&mut self, b: i32) -> DecodeResult<bool> {
            self._tab
                .mutate_at::<i32>(TableInFirstNS::VT_FOO_STRUCT, StructInNestedNS::B_OFFSET, b)
        }

        pub fn foo_table_mut(&mut self) -> DecodeResult<Option<TableInNestedNSMut<'_>>> {
            Ok(self
                ._tab
                .get_table_mut(TableInFirstNS::VT_FOO_TABLE)?
                .map(TableInNestedNSMut::init_from_table))
        }
    }

    /// Verifikasi seluruh buffer, lalu kembalikan root.
    pub fn root_as_table_in_first_ns(buf: &[u8]) -> DecodeResult<TableInFirstNS<'_>> {
        root_as_table_in_first_ns_with_opts(&VerifierOptions::default(), buf)
    }

    pub fn root_as_table_in_first_ns_with_opts<'a>(
        opts: &VerifierOptions,
        buf: &'a [u8],
    ) -> DecodeResult<TableInFirstNS<'a>> {
        verify_root::<TableInFirstNS>(buf, opts)?;
        root_as_table_in_first_ns_unverified(buf)
    }

    /// Tanpa verifikasi di depan; setiap akses field tetap bounds-checked.
    pub fn root_as_table_in_first_ns_unverified(buf: &[u8]) -> DecodeResult<TableInFirstNS<'_>> {
        <ForwardsUOffset<TableInFirstNS>>::follow(buf, 0)
    }

    pub fn size_prefixed_root_as_table_in_first_ns(buf: &[u8]) -> DecodeResult<TableInFirstNS<'_>> {
        verify_size_prefixed_root::<TableInFirstNS>(buf, &VerifierOptions::default())?;
        <ForwardsUOffset<TableInFirstNS>>::follow(buf, crate::protocol::layout::SIZE_SIZE_PREFIX)
    }

    pub fn root_as_table_in_first_ns_mut(buf: &mut [u8]) -> DecodeResult<TableInFirstNSMut<'_>> {
        verify_root::<TableInFirstNS>(buf, &VerifierOptions::default())?;
        Ok(TableInFirstNSMut::init_from_table(crate::protocol::root_of_mut(buf)?))
    }

    pub enum SecondTableInAOffset {}

    #[derive(Debug, Clone, Copy)]
    pub struct SecondTableInA<'a> {
        pub _tab: Table<'a>,
    }

    impl<'a> Follow<'a> for SecondTableInA<'a> {
        type Inner = SecondTableInA<'a>;

        #[inline]
        fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<Self::Inner> {
            Ok(Self {
                _tab: Table::new(buf, pos),
            })
        }
    }

    impl<'a> SecondTableInA<'a> {
        pub const VT_REFER_TO_C: u16 = 4;

        #[inline]
        pub fn init_from_table(table: Table<'a>) -> Self {
            Self { _tab: table }
        }

        pub fn create(
            fbb: &mut Builder,
            args: &SecondTableInAArgs,
        ) -> BuildResult<Offset<SecondTableInAOffset>> {
            let mut builder = SecondTableInABuilder::new(fbb)?;
            if let Some(x) = args.refer_to_c {
                builder.add_refer_to_c(x)?;
            }
            builder.finish()
        }

        #[inline]
        pub fn refer_to_c(&self) -> DecodeResult<Option<TableInC<'a>>> {
            self._tab
                .get_field::<ForwardsUOffset<TableInC<'a>>>(Self::VT_REFER_TO_C)
        }
    }

    impl Verifiable for SecondTableInA<'_> {
        fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<TableInC>>(Self::VT_REFER_TO_C, false)?
                .finish();
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct SecondTableInAArgs {
        pub refer_to_c: Option<Offset<TableInCOffset>>,
    }

    pub struct SecondTableInABuilder<'b> {
        fbb: &'b mut Builder,
    }

    impl<'b> SecondTableInABuilder<'b> {
        pub fn new(fbb: &'b mut Builder) -> BuildResult<Self> {
            fbb.start_object(1)?;
            Ok(Self { fbb })
        }

        #[inline]
        pub fn add_refer_to_c(&mut self, refer_to_c: Offset<TableInCOffset>) -> BuildResult<()> {
            self.fbb.add_field_offset(0, refer_to_c)
        }

        pub fn finish(self) -> BuildResult<Offset<SecondTableInAOffset>> {
            self.fbb.end_object()
        }
    }

    #[derive(Debug)]
    pub struct SecondTableInAMut<'a> {
        pub _tab: TableMut<'a>,
    }

    impl<'a> SecondTableInAMut<'a> {
        #[inline]
        pub fn init_from_table(table: TableMut<'a>) -> Self {
            Self { _tab: table }
        }

        pub fn reader(&self) -> SecondTableInA<'_> {
            SecondTableInA::init_from_table(self._tab.as_table())
        }

        pub fn refer_to_c_mut(&mut self) -> DecodeResult<Option<TableInCMut<'_>>> {
            Ok(self
                ._tab
                .get_table_mut(SecondTableInA::VT_REFER_TO_C)?
                .map(TableInCMut::init_from_table))
        }
    }

    pub fn root_as_second_table_in_a(buf: &[u8]) -> DecodeResult<SecondTableInA<'_>> {
        root_as_second_table_in_a_with_opts(&VerifierOptions::default(), buf)
    }

    pub fn root_as_second_table_in_a_with_opts<'a>(
        opts: &VerifierOptions,
        buf: &'a [u8],
    ) -> DecodeResult<SecondTableInA<'a>> {
        verify_root::<SecondTableInA>(buf, opts)?;
        root_as_second_table_in_a_unverified(buf)
    }

    pub fn root_as_second_table_in_a_unverified(buf: &[u8]) -> DecodeResult<SecondTableInA<'_>> {
        <ForwardsUOffset<SecondTableInA>>::follow(buf, 0)
    }

    pub fn size_prefixed_root_as_second_table_in_a(buf: &[u8]) -> DecodeResult<SecondTableInA<'_>> {
        verify_size_prefixed_root::<SecondTableInA>(buf, &VerifierOptions::default())?;
        <ForwardsUOffset<SecondTableInA>>::follow(buf, crate::protocol::layout::SIZE_SIZE_PREFIX)
    }

    pub fn root_as_second_table_in_a_mut(buf: &mut [u8]) -> DecodeResult<SecondTableInAMut<'_>> {
        verify_root::<SecondTableInA>(buf, &VerifierOptions::default())?;
        Ok(SecondTableInAMut::init_from_table(crate::protocol::root_of_mut(buf)?))
    }
}

pub mod namespace_c {
    use crate::config::VerifierOptions;
    use crate::error::{BuildResult, DecodeResult};
    use crate::protocol::layout::SIZE_SIZE_PREFIX;
    use crate::protocol::{
        root_of_mut, verify_root, verify_size_prefixed_root, Builder, Follow, ForwardsUOffset,
        Offset, Table, TableMut, Verifiable, Verifier,
    };

    use super::namespace_a::{
        SecondTableInA, SecondTableInAMut, SecondTableInAOffset, TableInFirstNS,
        TableInFirstNSMut, TableInFirstNSOffset,
    };

    pub enum TableInCOffset {}

    #[derive(Debug, Clone, Copy)]
    pub struct TableInC<'a> {
        pub _tab: Table<'a>,
    }

    impl<'a> Follow<'a> for TableInC<'a> {
        type Inner = TableInC<'a>;

        #[inline]
        fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<Self::Inner> {
            Ok(Self {
                _tab: Table::new(buf, pos),
            })
        }
    }

    impl<'a> TableInC<'a> {
        pub const VT_REFER_TO_A1: u16 = 4;
        pub const VT_REFER_TO_A2: u16 = 6;

        #[inline]
        pub fn init_from_table(table: Table<'a>) -> Self {
            Self { _tab: table }
        }

        pub fn create(fbb: &mut Builder, args: &TableInCArgs) -> BuildResult<Offset<TableInCOffset>> {
            let mut builder = TableInCBuilder::new(fbb)?;
            if let Some(x) = args.refer_to_a2 {
                builder.add_refer_to_a2(x)?;
            }
            if let Some(x) = args.refer_to_a1 {
                builder.add_refer_to_a1(x)?;
            }
            builder.finish()
        }

        #[inline]
        pub fn refer_to_a1(&self) -> DecodeResult<Option<TableInFirstNS<'a>>> {
            self._tab
                .get_field::<ForwardsUOffset<TableInFirstNS<'a>>>(Self::VT_REFER_TO_A1)
        }

        #[inline]
        pub fn refer_to_a2(&self) -> DecodeResult<Option<SecondTableInA<'a>>> {
            self._tab
                .get_field::<ForwardsUOffset<SecondTableInA<'a>>>(Self::VT_REFER_TO_A2)
        }
    }

    impl Verifiable for TableInC<'_> {
        fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<TableInFirstNS>>(Self::VT_REFER_TO_A1, false)?
                .visit_field::<ForwardsUOffset<SecondTableInA>>(Self::VT_REFER_TO_A2, false)?
                .finish();
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct TableInCArgs {
        pub refer_to_a1: Option<Offset<TableInFirstNSOffset>>,
        pub refer_to_a2: Option<Offset<SecondTableInAOffset>>,
    }

    pub struct TableInCBuilder<'b> {
        fbb: &'b mut Builder,
    }

    impl<'b> TableInCBuilder<'b> {
        pub fn new(fbb: &'b mut Builder) -> BuildResult<Self> {
            fbb.start_object(2)?;
            Ok(Self { fbb })
        }

        #[inline]
        pub fn add_refer_to_a1(&mut self, refer_to_a1: Offset<TableInFirstNSOffset>) -> BuildResult<()> {
            self.fbb.add_field_offset(0, refer_to_a1)
        }

        #[inline]
        pub fn add_refer_to_a2(&mut self, refer_to_a2: Offset<SecondTableInAOffset>) -> BuildResult<()> {
            self.fbb.add_field_offset(1, refer_to_a2)
        }

        pub fn finish(self) -> BuildResult<Offset<TableInCOffset>> {
            self.fbb.end_object()
        }
    }

    /// Tidak ada scalar di `TableInC`; mutasi hanya lewat table yang direferensi.
    #[derive(Debug)]
    pub struct TableInCMut<'a> {
        pub _tab: TableMut<'a>,
    }

    impl<'a> TableInCMut<'a> {
        #[inline]
        pub fn init_from_table(table: TableMut<'a>) -> Self {
            Self { _tab: table }
        }

        pub fn reader(&self) -> TableInC<'_> {
            TableInC::init_from_table(self._tab.as_table())
        }

        pub fn refer_to_a1_mut(&mut self) -> DecodeResult<Option<TableInFirstNSMut<'_>>> {
            Ok(self
                ._tab
                .get_table_mut(TableInC::VT_REFER_TO_A1)?
                .map(TableInFirstNSMut::init_from_table))
        }

        pub fn refer_to_a2_mut(&mut self) -> DecodeResult<Option<SecondTableInAMut<'_>>> {
            Ok(self
                ._tab
                .get_table_mut(TableInC::VT_REFER_TO_A2)?
                .map(SecondTableInAMut::init_from_table))
        }
    }

    /// Verifikasi seluruh buffer, lalu kembalikan root.
    pub fn root_as_table_in_c(buf: &[u8]) -> DecodeResult<TableInC<'_>> {
        root_as_table_in_c_with_opts(&VerifierOptions::default(), buf)
    }

    pub fn root_as_table_in_c_with_opts<'a>(
        opts: &VerifierOptions,
        buf: &'a [u8],
    ) -> DecodeResult<TableInC<'a>> {
        verify_root::<TableInC>(buf, opts)?;
        root_as_table_in_c_unverified(buf)
    }

    pub fn root_as_table_in_c_unverified(buf: &[u8]) -> DecodeResult<TableInC<'_>> {
        <ForwardsUOffset<TableInC>>::follow(buf, 0)
    }

    pub fn size_prefixed_root_as_table_in_c(buf: &[u8]) -> DecodeResult<TableInC<'_>> {
        verify_size_prefixed_root::<TableInC>(buf, &VerifierOptions::default())?;
        <ForwardsUOffset<TableInC>>::follow(buf, SIZE_SIZE_PREFIX)
    }

    pub fn root_as_table_in_c_mut(buf: &mut [u8]) -> DecodeResult<TableInCMut<'_>> {
        verify_root::<TableInC>(buf, &VerifierOptions::default())?;
        Ok(TableInCMut::init_from_table(root_of_mut(buf)?))
    }
}
